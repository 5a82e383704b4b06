//! Scatter: how much does memory layout cost a full pass over a large dataset?
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Scatter sub-crates. The `scatter` binary runs the full experiment with the
//! default [`BenchConfig`](bench::BenchConfig).
//!
//! # Quick start
//!
//! ```rust
//! use scatter::prelude::*;
//!
//! let config = BenchConfig {
//!     measured_iterations: 1,
//!     warmup_iterations: 0,
//!     ..BenchConfig::with_record_count(100)
//! };
//! let orchestrator = Orchestrator::new(config).unwrap();
//! let mut out = Vec::new();
//! let summary = orchestrator.run(&mut out).unwrap();
//! assert_eq!(summary.reports.len(), ScenarioKind::ALL.len());
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `scatter-core` | `Triangle`, deterministic streams, `observe` |
//! | [`arena`] | `scatter-arena` | Contiguous, boxed, and cell-linked record storage |
//! | [`bench`] | `scatter-bench` | Scenarios, runner, timer, orchestrator, logging |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Records, deterministic streams, and the optimisation barrier (`scatter-core`).
pub use scatter_core as types;

/// Record storage for each layout (`scatter-arena`).
///
/// [`arena::RecordBlock`] holds the contiguous dataset; the other types
/// arrange references to it or box records individually.
pub use scatter_arena as arena;

/// Scenarios, timing, and orchestration (`scatter-bench`).
pub use scatter_bench as bench;

/// Common imports for running the experiment programmatically.
pub mod prelude {
    // Core
    pub use scatter_core::{observe, CoordinateStream, FillerRange, FillerSizeStream, Triangle};

    // Errors
    pub use scatter_arena::ArenaError;
    pub use scatter_bench::{ConfigError, HarnessError};

    // Harness
    pub use scatter_bench::{
        BenchConfig, BenchmarkRunner, LayoutScenarioBuilder, Orchestrator, RunSummary, Scenario,
        ScenarioKind, ScopedTimer,
    };
}
