// Engine library root: input parsing, the two CAGR calculators and the
// year-by-year projector, plus the command line front end.

pub mod calculators;
pub mod cli;
pub mod error;
pub mod input;
pub mod projection;

pub use calculators::{
    calculator_for, compute_cagr, compute_future_value, evaluate, GrowthCalculator,
};
pub use error::{CalcError, EngineError, ErrorKind, InputField};
pub use input::RawInput;
pub use projection::{project_series, MAX_PROJECTION_YEARS};
