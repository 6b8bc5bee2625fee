// Reverse mode: projected final value from initial value, rate and duration
use super::{require_positive, GrowthCalculator};
use crate::error::{CalcError, InputField};
use crate::projection::project_series;
use shared::models::{
    CalculationInput, CalculationMode, CalculationReport, FutureValueResult, Headline,
};
use shared::utils::number_format::round_to;

/// `initial * (1 + rate_percent / 100)^years`, rounded to 2 decimals.
///
/// Unlike forward mode, which yields negative rates for shrinking values,
/// the rate here must be strictly positive.
pub fn compute_future_value(
    initial: f64,
    rate_percent: f64,
    years: f64,
) -> Result<FutureValueResult, CalcError> {
    let rate_decimal = rate_percent / 100.0;

    require_positive(InputField::InitialValue, initial)?;
    require_positive(InputField::Rate, rate_percent)?;
    // Subnormal percentages vanish once scaled to a fraction.
    if rate_decimal <= 0.0 {
        return Err(CalcError::Validation { field: InputField::Rate, value: rate_percent });
    }
    require_positive(InputField::Duration, years)?;

    let value = initial * (1.0 + rate_decimal).powf(years);
    if !value.is_finite() {
        tracing::debug!(initial, rate_percent, years, "Future value overflowed");
        return Err(CalcError::Overflow { mode: CalculationMode::Reverse });
    }

    Ok(FutureValueResult {
        final_value: round_to(value, 2),
        rate_decimal,
    })
}

pub struct ReverseCagr {
    name: String,
}

impl ReverseCagr {
    pub fn new() -> Self {
        Self { name: "Reverse CAGR".to_string() }
    }
}

impl Default for ReverseCagr {
    fn default() -> Self {
        Self::new()
    }
}

impl GrowthCalculator for ReverseCagr {
    fn name(&self) -> &str {
        &self.name
    }

    fn mode(&self) -> CalculationMode {
        CalculationMode::Reverse
    }

    fn formula(&self) -> &'static str {
        "Final = Initial * (1 + CAGR / 100)^Years"
    }

    fn calculate(&self, input: &CalculationInput) -> Result<CalculationReport, CalcError> {
        let result = compute_future_value(
            input.initial_value,
            input.final_value_or_rate,
            input.duration_years,
        )?;
        let series = project_series(input.initial_value, result.rate_decimal, input.duration_years);
        Ok(CalculationReport {
            mode: CalculationMode::Reverse,
            input: *input,
            headline: Headline::FinalValue(result),
            series,
        })
    }
}
