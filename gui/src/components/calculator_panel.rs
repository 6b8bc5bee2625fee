// One calculator: three inputs, then either the result and chart or an error
#![allow(non_snake_case)]
use dioxus::prelude::*;
use shared::models::CalculationMode;

use super::chart::BarChart;
use super::input_row::InputRow;
use crate::config::AppConfig;
use crate::state::app_state::{field_specs, AppState, PanelView};

#[component]
pub fn CalculatorPanel(state: Signal<AppState>, mode: CalculationMode) -> Element {
    let config = use_context::<AppConfig>();
    let mut state = state;
    let panel = state.read().panel(mode).clone();
    let currency = config.display.currency_symbol.clone();
    let grouping = config.display.grouping;

    let rows = field_specs(mode).map(|spec| {
        (spec.field, spec.label, panel.value(spec.field).to_string(), spec.unit.text(&currency))
    });

    let outcome = match panel.view(&config.display) {
        PanelView::Ready { label, value_text, unit, chart_title, series } => rsx! {
            div {
                class: "row result-row",
                div { class: "unit-box", "{label}" }
                div { class: "result-box", "{value_text}" }
                div { class: "unit-box", "{unit}" }
            }
            BarChart {
                title: chart_title.to_string(),
                series: series,
                currency: currency.clone(),
                grouping: grouping,
                color: config.chart.bar_color.clone(),
                height: config.chart.height,
            }
        },
        PanelView::Failed { message } => rsx! {
            div { class: "error-box", "{message}" }
        },
    };

    rsx! {
        div {
            class: "panel",
            for (field, label, value, unit) in rows {
                InputRow {
                    key: "{label}",
                    label: label.to_string(),
                    value: value,
                    unit: unit,
                    on_change: move |text: String| state.write().panel_mut(mode).set(field, text),
                }
            }
            {outcome}
        }
    }
}
