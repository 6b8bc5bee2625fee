// Application state for the GUI: the active tab and the text of both panels.
// Held in one root signal so switching tabs keeps what was typed.

use crate::config::{AppConfig, DisplaySettings};
use engine::{evaluate, RawInput};
use shared::models::{CalculationMode, Headline, ProjectionSeries};
use shared::utils::number_format::format_grouped;

/// One of the three text fields of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelField {
    Initial,
    Second,
    Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Currency,
    Percent,
    Years,
}

impl Unit {
    pub fn text(&self, currency_symbol: &str) -> String {
        match self {
            Unit::Currency => currency_symbol.to_string(),
            Unit::Percent => "%".to_string(),
            Unit::Years => "Yrs".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: PanelField,
    pub label: &'static str,
    pub unit: Unit,
}

pub fn field_specs(mode: CalculationMode) -> [FieldSpec; 3] {
    let (second_label, second_unit, duration_label) = match mode {
        CalculationMode::Forward => ("Final Value Costs", Unit::Currency, "Duration of Investment"),
        CalculationMode::Reverse => ("CAGR", Unit::Percent, "Duration"),
    };
    [
        FieldSpec { field: PanelField::Initial, label: "Initial Value", unit: Unit::Currency },
        FieldSpec { field: PanelField::Second, label: second_label, unit: second_unit },
        FieldSpec { field: PanelField::Duration, label: duration_label, unit: Unit::Years },
    ]
}

pub fn tab_label(mode: CalculationMode) -> &'static str {
    match mode {
        CalculationMode::Forward => "📈 CAGR Calculator",
        CalculationMode::Reverse => "🔁 Reverse CAGR Calculator",
    }
}

pub fn chart_title(mode: CalculationMode) -> &'static str {
    match mode {
        CalculationMode::Forward => "📊 Investment Growth Over Time",
        CalculationMode::Reverse => "📊 Future Value Projection",
    }
}

/// What a panel shows below its inputs.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView {
    /// Result row (label, value, unit badge) followed by the chart.
    Ready {
        label: &'static str,
        value_text: String,
        unit: String,
        chart_title: &'static str,
        series: ProjectionSeries,
    },
    Failed {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    pub mode: CalculationMode,
    pub raw: RawInput,
}

impl PanelState {
    pub fn new(mode: CalculationMode, raw: RawInput) -> Self {
        Self { mode, raw }
    }

    pub fn value(&self, field: PanelField) -> &str {
        match field {
            PanelField::Initial => &self.raw.initial,
            PanelField::Second => &self.raw.second,
            PanelField::Duration => &self.raw.duration,
        }
    }

    pub fn set(&mut self, field: PanelField, text: String) {
        tracing::debug!(mode = %self.mode, ?field, text = %text, "Input changed");
        match field {
            PanelField::Initial => self.raw.initial = text,
            PanelField::Second => self.raw.second = text,
            PanelField::Duration => self.raw.duration = text,
        }
    }

    /// Recomputes from the current text; errors replace result and chart.
    pub fn view(&self, display: &DisplaySettings) -> PanelView {
        match evaluate(self.mode, &self.raw) {
            Ok(report) => {
                let (value_text, unit) = match &report.headline {
                    Headline::Rate(rate) => (
                        format_grouped(rate.rate_percent, 2, display.grouping),
                        Unit::Percent.text(&display.currency_symbol),
                    ),
                    headline => (
                        headline.display_value(&display.currency_symbol, display.grouping),
                        Unit::Currency.text(&display.currency_symbol),
                    ),
                };
                PanelView::Ready {
                    label: report.headline.label(),
                    value_text,
                    unit,
                    chart_title: chart_title(self.mode),
                    series: report.series,
                }
            }
            Err(e) => {
                tracing::debug!(mode = %self.mode, error = ?e, "Showing input error");
                PanelView::Failed { message: e.to_string() }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub active_tab: CalculationMode,
    pub forward: PanelState,
    pub reverse: PanelState,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            active_tab: CalculationMode::Forward,
            forward: PanelState::new(
                CalculationMode::Forward,
                config.defaults_for(CalculationMode::Forward).to_raw_input(),
            ),
            reverse: PanelState::new(
                CalculationMode::Reverse,
                config.defaults_for(CalculationMode::Reverse).to_raw_input(),
            ),
        }
    }

    pub fn select_tab(&mut self, mode: CalculationMode) {
        self.active_tab = mode;
    }

    pub fn panel(&self, mode: CalculationMode) -> &PanelState {
        match mode {
            CalculationMode::Forward => &self.forward,
            CalculationMode::Reverse => &self.reverse,
        }
    }

    pub fn panel_mut(&mut self, mode: CalculationMode) -> &mut PanelState {
        match mode {
            CalculationMode::Forward => &mut self.forward,
            CalculationMode::Reverse => &mut self.reverse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::utils::number_format::Grouping;

    fn display() -> DisplaySettings {
        DisplaySettings { currency_symbol: "₹".to_string(), grouping: Grouping::Thousands }
    }

    fn state() -> AppState {
        AppState::new(&AppConfig::load_default().unwrap())
    }

    #[test]
    fn test_default_forward_panel() {
        let app = state();
        match app.panel(CalculationMode::Forward).view(&display()) {
            PanelView::Ready { label, value_text, unit, chart_title, series } => {
                assert_eq!(label, "CAGR");
                assert_eq!(value_text, "14.87");
                assert_eq!(unit, "%");
                assert_eq!(chart_title, "📊 Investment Growth Over Time");
                assert_eq!(series.len(), 5);
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_reverse_panel_formats_currency() {
        let mut app = state();
        app.panel_mut(CalculationMode::Reverse).set(PanelField::Second, "12".to_string());
        match app.panel(CalculationMode::Reverse).view(&display()) {
            PanelView::Ready { label, value_text, unit, .. } => {
                assert_eq!(label, "Maturity Value");
                assert_eq!(value_text, "₹17,623.42");
                assert_eq!(unit, "₹");
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_errors_replace_result() {
        let mut app = state();
        app.panel_mut(CalculationMode::Forward).set(PanelField::Initial, "ten".to_string());
        assert_eq!(
            app.panel(CalculationMode::Forward).view(&display()),
            PanelView::Failed { message: "Please enter valid numbers only.".to_string() }
        );

        app.panel_mut(CalculationMode::Forward).set(PanelField::Initial, "0".to_string());
        assert_eq!(
            app.panel(CalculationMode::Forward).view(&display()),
            PanelView::Failed { message: "All values must be greater than 0.".to_string() }
        );
    }

    #[test]
    fn test_panels_are_independent() {
        let mut app = state();
        app.panel_mut(CalculationMode::Forward).set(PanelField::Duration, "abc".to_string());
        app.select_tab(CalculationMode::Reverse);
        assert_eq!(app.active_tab, CalculationMode::Reverse);
        let reverse = app.panel(CalculationMode::Reverse).view(&display());
        assert!(matches!(reverse, PanelView::Ready { .. }));
        assert_eq!(app.panel(CalculationMode::Forward).value(PanelField::Duration), "abc");
    }

    #[test]
    fn test_field_specs() {
        let reverse = field_specs(CalculationMode::Reverse);
        assert_eq!(reverse[1].label, "CAGR");
        assert_eq!(reverse[1].unit.text("₹"), "%");
        assert_eq!(reverse[2].unit.text("₹"), "Yrs");

        let forward = field_specs(CalculationMode::Forward);
        assert_eq!(forward[1].label, "Final Value Costs");
        assert_eq!(forward[2].label, "Duration of Investment");
        assert_eq!(forward[1].unit.text("$"), "$");
        assert_eq!(forward[0].field, PanelField::Initial);
    }
}
