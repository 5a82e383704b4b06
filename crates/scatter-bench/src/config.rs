//! Benchmark configuration, validation, and error types.
//!
//! [`BenchConfig`] holds every tunable of the experiment. Nothing is read
//! from the command line or the environment; a run is fully described by
//! the value passed to [`Orchestrator::new`](crate::Orchestrator::new).

use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;

use scatter_core::{FillerRange, StreamError};
use tracing_subscriber::EnvFilter;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`BenchConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `record_count` is zero.
    EmptyDataset,
    /// `measured_iterations` is zero, so no mean can be taken.
    ZeroMeasuredIterations,
    /// The filler size bounds are unusable.
    FillerRange(StreamError),
    /// `log_filter` is not a valid tracing filter directive.
    InvalidLogFilter {
        /// Parser message for the rejected directive.
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDataset => write!(f, "record_count must be at least 1"),
            Self::ZeroMeasuredIterations => {
                write!(f, "measured_iterations must be at least 1")
            }
            Self::FillerRange(e) => write!(f, "filler sizes: {e}"),
            Self::InvalidLogFilter { reason } => write!(f, "invalid log filter: {reason}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::FillerRange(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StreamError> for ConfigError {
    fn from(e: StreamError) -> Self {
        Self::FillerRange(e)
    }
}

// ── BenchConfig ────────────────────────────────────────────────────

/// Tunables for one run of the five layout scenarios.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    /// Number of logical records in every scenario. Default: 50_000_000.
    pub record_count: usize,
    /// Seed shared by the coordinate and filler-size streams. Default: 42.
    pub seed: u64,
    /// Timed full-dataset passes per scenario. Default: 5.
    pub measured_iterations: u32,
    /// Untimed passes before measurement starts. Default: 2.
    pub warmup_iterations: u32,
    /// Filler allocation size bounds. Default: [`FillerRange::NARROW`].
    pub filler_sizes: FillerRange,
    /// `tracing` filter directive for diagnostics on stderr. Default: `"info"`.
    pub log_filter: String,
}

impl BenchConfig {
    /// Default dataset size.
    pub const DEFAULT_RECORD_COUNT: usize = 50_000_000;

    /// Default stream seed.
    pub const DEFAULT_SEED: u64 = 42;

    /// Default measured pass count.
    pub const DEFAULT_MEASURED_ITERATIONS: u32 = 5;

    /// Default warmup pass count.
    pub const DEFAULT_WARMUP_ITERATIONS: u32 = 2;

    /// Default diagnostic filter.
    pub const DEFAULT_LOG_FILTER: &'static str = "info";

    /// Default configuration with a different dataset size.
    pub fn with_record_count(record_count: usize) -> Self {
        Self {
            record_count,
            ..Self::default()
        }
    }

    /// Check structural invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.record_count == 0 {
            return Err(ConfigError::EmptyDataset);
        }
        self.measured()?;
        self.filler_sizes.validate()?;
        self.env_filter()?;
        Ok(())
    }

    /// The measured pass count as a non-zero value.
    pub fn measured(&self) -> Result<NonZeroU32, ConfigError> {
        NonZeroU32::new(self.measured_iterations).ok_or(ConfigError::ZeroMeasuredIterations)
    }

    /// Parse [`log_filter`](Self::log_filter) into a tracing filter.
    pub fn env_filter(&self) -> Result<EnvFilter, ConfigError> {
        EnvFilter::try_new(&self.log_filter).map_err(|e| ConfigError::InvalidLogFilter {
            reason: e.to_string(),
        })
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            record_count: Self::DEFAULT_RECORD_COUNT,
            seed: Self::DEFAULT_SEED,
            measured_iterations: Self::DEFAULT_MEASURED_ITERATIONS,
            warmup_iterations: Self::DEFAULT_WARMUP_ITERATIONS,
            filler_sizes: FillerRange::NARROW,
            log_filter: Self::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
