// CAGR Engine: forward (rate from values) and reverse (value from rate) calculators.
pub mod cagr;
pub mod future_value;

pub use cagr::{compute_cagr, ForwardCagr};
pub use future_value::{compute_future_value, ReverseCagr};

use crate::error::{CalcError, InputField};
use crate::input::RawInput;
use shared::models::{CalculationInput, CalculationMode, CalculationReport};

// Common trait for both calculation directions
pub trait GrowthCalculator: Send + Sync {
    fn name(&self) -> &str;
    fn mode(&self) -> CalculationMode;
    fn formula(&self) -> &'static str;
    /// Validates, computes the headline and projects the yearly series.
    fn calculate(&self, input: &CalculationInput) -> Result<CalculationReport, CalcError>;
}

pub fn calculator_for(mode: CalculationMode) -> Box<dyn GrowthCalculator> {
    match mode {
        CalculationMode::Forward => Box::new(ForwardCagr::new()),
        CalculationMode::Reverse => Box::new(ReverseCagr::new()),
    }
}

/// Text in, report out: parse, validate, compute, project.
pub fn evaluate(mode: CalculationMode, raw: &RawInput) -> Result<CalculationReport, CalcError> {
    let input = raw.collect(mode)?;
    let calculator = calculator_for(mode);
    let report = calculator.calculate(&input)?;
    tracing::debug!(
        calculator = calculator.name(),
        initial = input.initial_value,
        second = input.final_value_or_rate,
        years = input.duration_years,
        rate = report.headline.rate_decimal(),
        points = report.series.len(),
        truncated = report.series.truncated,
        "Calculation complete"
    );
    Ok(report)
}

/// Non-finite values are parse failures, zero or negative ones validation failures.
pub(crate) fn require_positive(field: InputField, value: f64) -> Result<(), CalcError> {
    if !value.is_finite() {
        return Err(CalcError::Parse { field, raw: value.to_string() });
    }
    if value <= 0.0 {
        tracing::debug!(field = %field, value, "Rejected non-positive input");
        return Err(CalcError::Validation { field, value });
    }
    Ok(())
}
