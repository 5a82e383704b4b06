//! Runs all five layout scenarios with the default configuration and prints
//! one timing line per scenario to stdout.

use std::process::ExitCode;

use scatter::bench::{logging, BenchConfig, HarnessError, Orchestrator};
use tracing::{error, info};

fn run(config: BenchConfig) -> Result<(), HarnessError> {
    let orchestrator = Orchestrator::new(config)?;
    let stdout = std::io::stdout();
    let summary = orchestrator.run(&mut stdout.lock())?;
    info!(
        scenarios = summary.reports.len(),
        area_spread = summary.max_relative_area_spread(),
        "run complete"
    );
    Ok(())
}

fn main() -> ExitCode {
    let config = BenchConfig::default();
    if let Err(e) = logging::init(&config) {
        eprintln!("scatter: {e}");
        return ExitCode::FAILURE;
    }

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "run failed");
            ExitCode::FAILURE
        }
    }
}
