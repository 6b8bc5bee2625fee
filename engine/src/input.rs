// Input Collector: raw text fields to numbers.
use crate::error::{CalcError, InputField};
use shared::models::{CalculationInput, CalculationMode};
use shared::utils::number_format::strip_separators;
use std::str::FromStr;

/// Parses one field after stripping thousands separators.
///
/// Empty text and non-finite values ("inf", "NaN") are rejected.
pub fn parse_field(field: InputField, raw: &str) -> Result<f64, CalcError> {
    let normalized = strip_separators(raw);
    match f64::from_str(&normalized) {
        Ok(value) if value.is_finite() => Ok(value),
        _ => {
            tracing::debug!(field = %field, raw = %raw, "Rejected non-numeric input");
            Err(CalcError::Parse { field, raw: raw.to_string() })
        }
    }
}

/// The field holding the second number for a mode.
pub fn second_field(mode: CalculationMode) -> InputField {
    match mode {
        CalculationMode::Forward => InputField::FinalValue,
        CalculationMode::Reverse => InputField::Rate,
    }
}

/// Parses all three fields left to right, reporting the first failure.
pub fn collect(
    mode: CalculationMode,
    initial_raw: &str,
    second_raw: &str,
    duration_raw: &str,
) -> Result<CalculationInput, CalcError> {
    let initial = parse_field(InputField::InitialValue, initial_raw)?;
    let second = parse_field(second_field(mode), second_raw)?;
    let duration = parse_field(InputField::Duration, duration_raw)?;
    Ok(CalculationInput::new(initial, second, duration))
}

/// Text of the three fields exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInput {
    pub initial: String,
    pub second: String,
    pub duration: String,
}

impl RawInput {
    pub fn new(
        initial: impl Into<String>,
        second: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            initial: initial.into(),
            second: second.into(),
            duration: duration.into(),
        }
    }

    pub fn collect(&self, mode: CalculationMode) -> Result<CalculationInput, CalcError> {
        collect(mode, &self.initial, &self.second, &self.duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comma_separated_matches_plain() {
        assert_eq!(
            parse_field(InputField::InitialValue, "10,000").unwrap(),
            parse_field(InputField::InitialValue, "10000").unwrap()
        );
        assert_eq!(parse_field(InputField::FinalValue, "1,00,000.5").unwrap(), 100000.5);
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(parse_field(InputField::Duration, " 5 ").unwrap(), 5.0);
    }

    #[test]
    fn test_rejects_garbage() {
        for raw in ["abc", "", "   ", "12abc", "1.2.3", "inf", "NaN", "-inf"] {
            let err = parse_field(InputField::Rate, raw).unwrap_err();
            let expected = CalcError::Parse { field: InputField::Rate, raw: raw.to_string() };
            assert_eq!(err, expected, "input {:?}", raw);
        }
    }

    #[test]
    fn test_negative_and_zero_parse() {
        // Sign checks belong to validation, not parsing.
        assert_eq!(parse_field(InputField::InitialValue, "-5").unwrap(), -5.0);
        assert_eq!(parse_field(InputField::InitialValue, "0").unwrap(), 0.0);
    }

    #[test]
    fn test_collect_reports_first_bad_field() {
        let err = collect(CalculationMode::Forward, "10000", "x", "y").unwrap_err();
        assert_eq!(err.field(), Some(InputField::FinalValue));

        let err = collect(CalculationMode::Reverse, "10000", "x", "5").unwrap_err();
        assert_eq!(err.field(), Some(InputField::Rate));
    }

    #[test]
    fn test_raw_input_collect() {
        let raw = RawInput::new("10,000", "14.87", "5");
        let input = raw.collect(CalculationMode::Reverse).unwrap();
        assert_eq!(input, CalculationInput::new(10000.0, 14.87, 5.0));
    }
}
