use shared::models::CalculationMode;
use std::fmt;
use thiserror::Error;

/// The text field a value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputField {
    InitialValue,
    FinalValue,
    Rate,
    Duration,
}

impl InputField {
    pub fn label(&self) -> &'static str {
        match self {
            InputField::InitialValue => "Initial Value",
            InputField::FinalValue => "Final Value",
            InputField::Rate => "CAGR",
            InputField::Duration => "Duration",
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// User-facing error category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Validation,
}

/// Failure of a single calculation. Display is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("Please enter valid numbers only.")]
    Parse { field: InputField, raw: String },

    #[error("All values must be greater than 0.")]
    Validation { field: InputField, value: f64 },

    // Reported like a parse failure: the user typed numbers the formula cannot represent.
    #[error("Please enter valid numbers only.")]
    Overflow { mode: CalculationMode },
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::Parse { .. } | CalcError::Overflow { .. } => ErrorKind::Parse,
            CalcError::Validation { .. } => ErrorKind::Validation,
        }
    }

    /// The offending field, when one can be named.
    pub fn field(&self) -> Option<InputField> {
        match self {
            CalcError::Parse { field, .. } | CalcError::Validation { field, .. } => Some(*field),
            CalcError::Overflow { .. } => None,
        }
    }
}

/// Errors of the command line front end.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    Calculation(#[from] CalcError),

    #[error("CSV output error: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },

    #[error("JSON output error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },

    #[error("I/O error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl EngineError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            EngineError::Calculation(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let parse = CalcError::Parse { field: InputField::InitialValue, raw: "abc".to_string() };
        let invalid = CalcError::Validation { field: InputField::Duration, value: 0.0 };
        assert_eq!(parse.to_string(), "Please enter valid numbers only.");
        assert_eq!(invalid.to_string(), "All values must be greater than 0.");
    }

    #[test]
    fn test_overflow_reports_as_parse() {
        let err = CalcError::Overflow { mode: CalculationMode::Forward };
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert_eq!(err.field(), None);
        assert_eq!(err.to_string(), "Please enter valid numbers only.");
    }

    #[test]
    fn test_exit_codes() {
        let calc: EngineError =
            CalcError::Validation { field: InputField::Rate, value: -1.0 }.into();
        assert_eq!(calc.exit_code(), 2);
        let io: EngineError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(io.exit_code(), 1);
    }
}
