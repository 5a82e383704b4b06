//! Core types for the Scatter memory-layout benchmark.
//!
//! This is the leaf crate with no internal dependencies. It defines the
//! pieces every layout scenario shares:
//!
//! - [`Triangle`]: the fixed-size record whose area is summed on every scan.
//! - [`CoordinateStream`] / [`FillerSizeStream`]: independently seeded
//!   deterministic generators for record coordinates and filler sizes.
//! - [`observe`]: the optimisation barrier that keeps a scan alive.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod barrier;
pub mod error;
pub mod record;
pub mod stream;

pub use barrier::observe;
pub use error::StreamError;
pub use record::Triangle;
pub use stream::{CoordinateStream, FillerRange, FillerSizeStream};
