//! Test utilities for Scatter development.
//!
//! Provides instrumented workloads for exercising
//! [`BenchmarkRunner`](scatter_bench::BenchmarkRunner), reference
//! triangles with known areas, small-dataset configs, and a
//! [`CountingAllocator`] for allocation-balance tests.

#![deny(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod alloc;
pub mod fixtures;

use std::time::{Duration, Instant};

use scatter_bench::{BenchConfig, Iteration};

pub use alloc::CountingAllocator;
pub use fixtures::{collinear_triangle, square_spanning_triangle, unit_right_triangle};

/// A downsized config for end-to-end runs: `record_count` records,
/// 3 measured passes, 1 warmup pass, diagnostics off.
pub fn small_config(record_count: usize) -> BenchConfig {
    BenchConfig {
        measured_iterations: 3,
        warmup_iterations: 1,
        log_filter: "off".to_string(),
        ..BenchConfig::with_record_count(record_count)
    }
}

/// Workload that records every invocation it receives.
#[derive(Debug, Default)]
pub struct CountingWorkload {
    seen: Vec<Iteration>,
}

impl CountingWorkload {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one invocation.
    pub fn call(&mut self, iteration: Iteration) {
        self.seen.push(iteration);
    }

    /// Total invocations.
    pub fn total(&self) -> usize {
        self.seen.len()
    }

    /// Invocations inside the warmup phase.
    pub fn warmup_calls(&self) -> usize {
        self.seen.iter().filter(|it| !it.is_measured()).count()
    }

    /// Invocations inside the timed phase.
    pub fn measured_calls(&self) -> usize {
        self.seen.iter().filter(|it| it.is_measured()).count()
    }

    /// Every invocation, in call order.
    pub fn seen(&self) -> &[Iteration] {
        &self.seen
    }
}

/// Workload that busy-waits for a fixed delay on every invocation.
///
/// Spinning on [`Instant`] keeps the delay accurate well below the
/// scheduler's sleep granularity.
#[derive(Clone, Copy, Debug)]
pub struct DelayWorkload {
    pub delay: Duration,
}

impl DelayWorkload {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Block the calling thread for at least `delay`.
    pub fn call(&self, _iteration: Iteration) {
        let start = Instant::now();
        while start.elapsed() < self.delay {
            std::hint::spin_loop();
        }
    }
}
