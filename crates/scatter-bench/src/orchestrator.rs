//! Runs the five scenarios in order and writes the results.
//!
//! Output format (one record-size line, then two lines per scenario):
//!
//! ```text
//! record size: 24 bytes
//! --- Contiguous data
//! time: 41.532118 ms
//! --- Contiguous pointers to contiguous data
//! time: 52.004871 ms
//! ...
//! ```
//!
//! Every scenario stays alive until the run ends, so individually boxed
//! records and cells are only deallocated after the last measurement.
//! Filler buffers are released right after their scenario's timed run.

use std::io::Write;

use scatter_core::Triangle;
use tracing::{debug, info};

use crate::config::{BenchConfig, ConfigError};
use crate::error::HarnessError;
use crate::report::{RunSummary, ScenarioReport};
use crate::runner::BenchmarkRunner;
use crate::scenario::{LayoutScenarioBuilder, Scenario, ScenarioKind};
use crate::timer::ScopedTimer;

/// Sequences scenario construction, measurement, and reporting.
#[derive(Debug)]
pub struct Orchestrator {
    config: BenchConfig,
    runner: BenchmarkRunner,
}

impl Orchestrator {
    /// Validate `config` and prepare a runner from it.
    pub fn new(config: BenchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let runner = BenchmarkRunner::from_config(&config)?;
        Ok(Self { config, runner })
    }

    /// The configuration this orchestrator runs with.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Build and measure every scenario, writing results to `out`.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::Arena`] if scenario storage cannot be
    /// reserved and [`HarnessError::Output`] if writing fails. A failed run
    /// never reports a partial dataset.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary, HarnessError> {
        writeln!(out, "record size: {} bytes", std::mem::size_of::<Triangle>())?;

        let mut builder = LayoutScenarioBuilder::new(&self.config)?;
        info!(
            records = self.config.record_count,
            seed = self.config.seed,
            "generating record block"
        );
        let block = builder.record_block()?;

        let mut retained: Vec<Box<dyn Scenario + '_>> =
            Vec::with_capacity(ScenarioKind::ALL.len());
        let mut summary = RunSummary::default();

        for kind in ScenarioKind::ALL {
            writeln!(out, "--- {}", kind.label())?;

            let mut build_timer = ScopedTimer::started();
            let mut scenario = builder.build(kind, &block)?;
            build_timer.stop();
            info!(scenario = %kind, build_ms = build_timer.elapsed_ms(), "scenario built");

            let report = self.measure(scenario.as_mut());
            writeln!(out, "time: {:.6} ms", report.mean_ms)?;
            out.flush()?;

            summary.reports.push(report);
            retained.push(scenario);
        }

        debug!(scenarios = retained.len(), "releasing retained scenarios");
        drop(retained);
        Ok(summary)
    }

    /// Time one scenario, then release its fillers.
    fn measure(&self, scenario: &mut (dyn Scenario + '_)) -> ScenarioReport {
        let kind = scenario.kind();
        let mut area_sum = 0.0;
        let measurement = self.runner.run(|_| area_sum = scenario.scan());

        let fillers_released = scenario.release_fillers();
        if kind.uses_fillers() {
            debug!(scenario = %kind, released = fillers_released, "filler buffers released");
        }

        info!(
            scenario = %kind,
            mean_ms = measurement.mean_ms(),
            area_sum = f64::from(area_sum),
            "scenario measured"
        );

        ScenarioReport {
            kind,
            mean_ms: measurement.mean_ms(),
            area_sum,
            fillers_released,
        }
    }
}
