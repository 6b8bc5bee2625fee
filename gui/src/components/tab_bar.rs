// Switches between the forward and reverse calculators
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::CalculationMode;

use crate::state::app_state::{tab_label, AppState};

#[component]
pub fn TabBar(state: Signal<AppState>) -> Element {
    let mut state = state;
    let active = state.read().active_tab;
    let tabs = [CalculationMode::Forward, CalculationMode::Reverse].map(|mode| {
        let class = if mode == active { "tab tab-active" } else { "tab" };
        (mode, class, tab_label(mode))
    });

    rsx! {
        div {
            class: "tabs",
            for (mode, class, label) in tabs {
                button {
                    key: "{label}",
                    class: "{class}",
                    onclick: move |_| state.write().select_tab(mode),
                    "{label}"
                }
            }
        }
    }
}
