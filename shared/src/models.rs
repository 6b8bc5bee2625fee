use crate::utils::number_format::{format_currency, format_percent, Grouping};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which calculator a panel or command runs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CalculationMode {
    /// Initial and final value in, growth rate out.
    Forward,
    /// Initial value and growth rate in, final value out.
    Reverse,
}

impl CalculationMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            CalculationMode::Forward => "CAGR Calculator",
            CalculationMode::Reverse => "Reverse CAGR Calculator",
        }
    }
}

impl fmt::Display for CalculationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Parsed numbers of one calculation. Not validated on construction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalculationInput {
    pub initial_value: f64,
    /// Final amount in forward mode, rate in percent in reverse mode.
    pub final_value_or_rate: f64,
    pub duration_years: f64,
}

impl CalculationInput {
    pub fn new(initial_value: f64, final_value_or_rate: f64, duration_years: f64) -> Self {
        Self {
            initial_value,
            final_value_or_rate,
            duration_years,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CagrResult {
    /// Rate in percent, rounded to 2 decimals.
    pub rate_percent: f64,
    /// Unrounded rate as a fraction; feeds the projector.
    pub rate_decimal: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FutureValueResult {
    /// Projected value, rounded to 2 decimals.
    pub final_value: f64,
    pub rate_decimal: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ProjectionPoint {
    pub year: u32,
    pub value: f64,
}

/// Year-by-year values, ordered by year starting at 1.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProjectionSeries {
    pub points: Vec<ProjectionPoint>,
    /// Set when the duration covered more whole years than were projected.
    #[serde(default)]
    pub truncated: bool,
}

impl ProjectionSeries {
    pub fn new(points: Vec<ProjectionPoint>) -> Self {
        Self { points, truncated: false }
    }

    pub fn truncated(points: Vec<ProjectionPoint>) -> Self {
        Self { points, truncated: true }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&ProjectionPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&ProjectionPoint> {
        self.points.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ProjectionPoint> {
        self.points.iter()
    }

    pub fn max_value(&self) -> Option<f64> {
        self.points.iter().map(|p| p.value).reduce(f64::max)
    }
}

impl<'a> IntoIterator for &'a ProjectionSeries {
    type Item = &'a ProjectionPoint;
    type IntoIter = std::slice::Iter<'a, ProjectionPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// The scalar a calculation produces.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Headline {
    Rate(CagrResult),
    FinalValue(FutureValueResult),
}

impl Headline {
    /// The fractional rate the series was projected with.
    pub fn rate_decimal(&self) -> f64 {
        match self {
            Headline::Rate(r) => r.rate_decimal,
            Headline::FinalValue(v) => v.rate_decimal,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Headline::Rate(_) => "CAGR",
            Headline::FinalValue(_) => "Maturity Value",
        }
    }

    /// "14.87%" for a rate, "₹17,623.42" for a final value.
    pub fn display_value(&self, currency: &str, grouping: Grouping) -> String {
        match self {
            Headline::Rate(r) => format_percent(r.rate_percent),
            Headline::FinalValue(v) => format_currency(v.final_value, currency, grouping),
        }
    }
}

/// Full outcome of one successful calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationReport {
    pub mode: CalculationMode,
    pub input: CalculationInput,
    pub headline: Headline,
    pub series: ProjectionSeries,
}
