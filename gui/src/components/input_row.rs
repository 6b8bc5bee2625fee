// Label, text field and unit badge on one line
#![allow(non_snake_case)]
use dioxus::prelude::*;

#[component]
pub fn InputRow(
    label: String,
    value: String,
    unit: String,
    on_change: EventHandler<String>,
) -> Element {
    rsx! {
        div {
            class: "row",
            div { class: "input-label", "{label}" }
            input {
                class: "text-input",
                r#type: "text",
                value: "{value}",
                oninput: move |evt| on_change.call(evt.value()),
            }
            div { class: "unit-box", "{unit}" }
        }
    }
}
