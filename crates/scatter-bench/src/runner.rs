//! Warmup-then-measure benchmark loop.
//!
//! [`BenchmarkRunner::run`] calls a workload `warmup` times untimed, then
//! `measured` times inside one [`ScopedTimer`] interval, and reports the
//! mean per measured call. A workload is expected to be a full pass over
//! the dataset, so timer overhead is amortised over millions of records.

use std::num::NonZeroU32;
use std::time::Duration;

use scatter_core::observe;

use crate::config::{BenchConfig, ConfigError};
use crate::timer::ScopedTimer;

/// Which phase a workload invocation belongs to, with its index in that phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Iteration {
    /// Untimed invocation `n` of the warmup phase.
    Warmup(u32),
    /// Timed invocation `n` of the measured phase.
    Measured(u32),
}

impl Iteration {
    /// Whether this invocation is inside the timed interval.
    pub fn is_measured(&self) -> bool {
        matches!(self, Self::Measured(_))
    }

    /// Index within the current phase.
    pub fn index(&self) -> u32 {
        match self {
            Self::Warmup(i) | Self::Measured(i) => *i,
        }
    }
}

/// Result of one [`BenchmarkRunner::run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measurement {
    total: Duration,
    iterations: NonZeroU32,
}

impl Measurement {
    /// Wall time of the whole measured phase.
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Number of measured invocations.
    pub fn iterations(&self) -> u32 {
        self.iterations.get()
    }

    /// Mean time per measured invocation.
    pub fn mean(&self) -> Duration {
        self.total / self.iterations.get()
    }

    /// Mean time per measured invocation in fractional milliseconds.
    pub fn mean_ms(&self) -> f64 {
        self.total.as_secs_f64() * 1e3 / f64::from(self.iterations.get())
    }
}

/// Runs a workload through warmup and measured phases.
#[derive(Clone, Copy, Debug)]
pub struct BenchmarkRunner {
    measured: NonZeroU32,
    warmup: u32,
}

impl BenchmarkRunner {
    /// Runner with explicit phase lengths.
    pub fn new(measured: NonZeroU32, warmup: u32) -> Self {
        Self { measured, warmup }
    }

    /// Runner using the config's measured and warmup counts.
    pub fn from_config(config: &BenchConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.measured()?, config.warmup_iterations))
    }

    /// Number of measured invocations per run.
    pub fn measured(&self) -> u32 {
        self.measured.get()
    }

    /// Number of warmup invocations per run.
    pub fn warmup(&self) -> u32 {
        self.warmup
    }

    /// Invoke `workload` `warmup + measured` times and time the last `measured`.
    pub fn run<F>(&self, mut workload: F) -> Measurement
    where
        F: FnMut(Iteration),
    {
        // Indices pass through `observe` so neither loop can be collapsed.
        for i in 0..self.warmup {
            workload(Iteration::Warmup(observe(i)));
        }

        let mut timer = ScopedTimer::default();
        timer.start();
        for i in 0..self.measured.get() {
            workload(Iteration::Measured(observe(i)));
        }
        timer.stop();

        Measurement {
            total: timer.elapsed(),
            iterations: self.measured,
        }
    }
}
