#![allow(non_snake_case)]
use dioxus::prelude::*;

use crate::components::{CalculatorPanel, TabBar};
use crate::config::AppConfig;
use crate::state::app_state::AppState;

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let state = use_signal(|| AppState::new(&config));
    let active = state.read().active_tab;

    rsx! {
        div {
            class: "app",
            div { class: "title-box", "{config.app.title}" }
            TabBar { state: state }
            CalculatorPanel { state: state, mode: active }
        }
    }
}
