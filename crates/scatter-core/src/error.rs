//! Error types for stream construction.

use std::error::Error;
use std::fmt;

/// Errors that can occur while constructing a deterministic stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StreamError {
    /// The filler size bounds do not describe a non-empty range of
    /// positive sizes.
    InvalidRange {
        /// Requested lower bound (inclusive).
        min: u32,
        /// Requested upper bound (inclusive).
        max: u32,
    },
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { min, max } => {
                write!(f, "invalid filler size range {min}..={max}: need 1 <= min <= max")
            }
        }
    }
}

impl Error for StreamError {}
