//! Layout scenarios, timing harness, and orchestration for Scatter.
//!
//! The harness measures how long one full area-summing pass over a large
//! triangle dataset takes under five memory layouts:
//!
//! ```text
//! CoordinateStream ─► RecordBlock ─┬─► A  Contiguous
//!                                  ├─► B  ContiguousRefs
//!                                  └─► E  ScatteredCells   (+ fillers)
//! CoordinateStream (reseeded) ────┬─► C  ScatteredRefs
//!                                  └─► D  VeryScatteredRefs (+ fillers)
//!
//! Scenario ─► BenchmarkRunner (warmup, then timed passes) ─► mean ms
//! ```
//!
//! - [`LayoutScenarioBuilder`] constructs the layouts.
//! - [`BenchmarkRunner`] runs warmup and measured passes with a
//!   [`ScopedTimer`].
//! - [`Orchestrator`] sequences everything and writes the report.
//! - [`BenchConfig`] holds the tunables; [`logging::init`] wires up
//!   diagnostics on stderr.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod logging;
pub mod orchestrator;
pub mod report;
pub mod runner;
pub mod scenario;
pub mod timer;

pub use config::{BenchConfig, ConfigError};
pub use error::HarnessError;
pub use orchestrator::Orchestrator;
pub use report::{RunSummary, ScenarioReport};
pub use runner::{BenchmarkRunner, Iteration, Measurement};
pub use scenario::{LayoutScenarioBuilder, Scenario, ScenarioKind};
pub use timer::ScopedTimer;
