// Command line entry point
use clap::Parser;
use engine::calculators::{calculator_for, evaluate};
use engine::cli::output::{write_report, DisplayOptions};
use engine::cli::{init_logger, Cli};
use engine::EngineError;
use tracing::{debug, info};

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    if let Err(e) = run(&cli) {
        // The message itself reaches the user once, through stderr.
        debug!(exit_code = e.exit_code(), "Calculation failed");
        eprintln!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: &Cli) -> Result<(), EngineError> {
    let mode = cli.command.mode();
    info!(mode = %mode, "Running calculation");
    if cli.verbose {
        eprintln!("{}", calculator_for(mode).formula());
    }

    let report = evaluate(mode, &cli.command.raw_input())?;

    let opts = DisplayOptions {
        currency: cli.currency.clone(),
        grouping: cli.grouping.into(),
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&report, cli.format, &opts, &mut out)?;
    Ok(())
}
