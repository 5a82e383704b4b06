//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur while building record storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// A bulk reservation could not be satisfied.
    AllocationFailed {
        /// Which collection was being reserved.
        what: &'static str,
        /// Number of elements requested.
        requested: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { what, requested } => {
                write!(f, "allocation failed: {what} ({requested} elements)")
            }
        }
    }
}

impl Error for ArenaError {}
