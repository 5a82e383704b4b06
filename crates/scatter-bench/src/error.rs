//! Top-level error type for a benchmark run.

use std::error::Error;
use std::fmt;
use std::io;

use scatter_arena::ArenaError;

use crate::config::ConfigError;

/// Errors that abort a run. None of them are retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HarnessError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// Scenario storage could not be allocated.
    Arena(ArenaError),
    /// Writing results to the output stream failed.
    Output {
        /// The I/O error rendered as text.
        reason: String,
    },
    /// The diagnostic subscriber could not be installed.
    Logging {
        /// Why installation failed.
        reason: String,
    },
}

impl fmt::Display for HarnessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Arena(e) => write!(f, "arena: {e}"),
            Self::Output { reason } => write!(f, "output: {reason}"),
            Self::Logging { reason } => write!(f, "logging: {reason}"),
        }
    }
}

impl Error for HarnessError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Arena(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for HarnessError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<ArenaError> for HarnessError {
    fn from(e: ArenaError) -> Self {
        Self::Arena(e)
    }
}

impl From<io::Error> for HarnessError {
    fn from(e: io::Error) -> Self {
        Self::Output {
            reason: e.to_string(),
        }
    }
}
