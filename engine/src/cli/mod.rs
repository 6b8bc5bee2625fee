// Command line front end: argument definitions and logging setup.
pub mod output;

use crate::input::RawInput;
use clap::{Parser, Subcommand, ValueEnum};
use shared::models::CalculationMode;
use shared::utils::number_format::Grouping;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "cagr")]
#[command(version, about = "Compound annual growth rate calculator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Currency symbol for monetary values
    #[arg(long, default_value = "₹", global = true)]
    pub currency: String,

    /// Digit grouping for monetary values
    #[arg(long, value_enum, default_value_t = GroupingArg::Thousands, global = true)]
    pub grouping: GroupingArg,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Growth rate from an initial value, a final value and a duration
    Rate {
        /// Initial value, e.g. 10,000
        #[arg(long, allow_hyphen_values = true)]
        initial: String,
        /// Final value, e.g. 20,000
        #[arg(long = "final", allow_hyphen_values = true)]
        final_value: String,
        /// Duration in years, fractions allowed
        #[arg(long, allow_hyphen_values = true)]
        years: String,
    },
    /// Projected value from an initial value, a rate in percent and a duration
    FutureValue {
        #[arg(long, allow_hyphen_values = true)]
        initial: String,
        /// Annual growth rate in percent, e.g. 14.87
        #[arg(long, allow_hyphen_values = true)]
        rate: String,
        #[arg(long, allow_hyphen_values = true)]
        years: String,
    },
}

impl Command {
    pub fn mode(&self) -> CalculationMode {
        match self {
            Command::Rate { .. } => CalculationMode::Forward,
            Command::FutureValue { .. } => CalculationMode::Reverse,
        }
    }

    pub fn raw_input(&self) -> RawInput {
        match self {
            Command::Rate { initial, final_value, years } => {
                RawInput::new(initial, final_value, years)
            }
            Command::FutureValue { initial, rate, years } => RawInput::new(initial, rate, years),
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupingArg {
    Thousands,
    Indian,
}

impl From<GroupingArg> for Grouping {
    fn from(arg: GroupingArg) -> Self {
        match arg {
            GroupingArg::Thousands => Grouping::Thousands,
            GroupingArg::Indian => Grouping::Indian,
        }
    }
}

/// Logs go to stderr so that JSON and CSV output on stdout stays clean.
pub fn init_logger(verbose: bool) {
    let default_directive = if verbose { "engine=debug,info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rate_command() {
        let args = ["cagr", "rate", "--initial", "10,000", "--final", "20000", "--years", "5"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.command.mode(), CalculationMode::Forward);
        assert_eq!(cli.command.raw_input(), RawInput::new("10,000", "20000", "5"));
        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.currency, "₹");
    }

    #[test]
    fn test_parse_future_value_with_globals() {
        let cli = Cli::try_parse_from([
            "cagr",
            "future-value",
            "--initial",
            "10000",
            "--rate",
            "12",
            "--years",
            "5",
            "--format",
            "json",
            "--grouping",
            "indian",
        ])
        .unwrap();
        assert_eq!(cli.command.mode(), CalculationMode::Reverse);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(Grouping::from(cli.grouping), Grouping::Indian);
    }

    #[test]
    fn test_negative_values_reach_validation() {
        let args = ["cagr", "rate", "--initial", "-5", "--final", "10", "--years", "2"];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(cli.command.raw_input().initial, "-5");
    }

    #[test]
    fn test_missing_argument_is_rejected() {
        assert!(Cli::try_parse_from(["cagr", "rate", "--initial", "1"]).is_err());
    }
}
