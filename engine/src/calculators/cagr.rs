// Forward mode: compound annual growth rate from initial value, final value and duration
use super::{require_positive, GrowthCalculator};
use crate::error::{CalcError, InputField};
use crate::projection::project_series;
use shared::models::{CagrResult, CalculationInput, CalculationMode, CalculationReport, Headline};
use shared::utils::number_format::round_to;

/// `(final / initial)^(1 / years) - 1`, in percent rounded to 2 decimals.
///
/// Fractional years are allowed. A final value below the initial one gives
/// a negative rate.
pub fn compute_cagr(initial: f64, final_value: f64, years: f64) -> Result<CagrResult, CalcError> {
    require_positive(InputField::InitialValue, initial)?;
    require_positive(InputField::FinalValue, final_value)?;
    require_positive(InputField::Duration, years)?;

    let rate_decimal = (final_value / initial).powf(1.0 / years) - 1.0;
    if !rate_decimal.is_finite() {
        tracing::debug!(initial, final_value, years, "CAGR overflowed");
        return Err(CalcError::Overflow { mode: CalculationMode::Forward });
    }

    Ok(CagrResult {
        rate_percent: round_to(rate_decimal * 100.0, 2),
        rate_decimal,
    })
}

pub struct ForwardCagr {
    name: String,
}

impl ForwardCagr {
    pub fn new() -> Self {
        Self { name: "CAGR".to_string() }
    }
}

impl Default for ForwardCagr {
    fn default() -> Self {
        Self::new()
    }
}

impl GrowthCalculator for ForwardCagr {
    fn name(&self) -> &str {
        &self.name
    }

    fn mode(&self) -> CalculationMode {
        CalculationMode::Forward
    }

    fn formula(&self) -> &'static str {
        "CAGR = (Final / Initial)^(1 / Years) - 1"
    }

    fn calculate(&self, input: &CalculationInput) -> Result<CalculationReport, CalcError> {
        let result =
            compute_cagr(input.initial_value, input.final_value_or_rate, input.duration_years)?;
        // The chart is projected with the unrounded rate.
        let series = project_series(input.initial_value, result.rate_decimal, input.duration_years);
        Ok(CalculationReport {
            mode: CalculationMode::Forward,
            input: *input,
            headline: Headline::Rate(result),
            series,
        })
    }
}
