//! Monotonic stopwatch for bracketing a timed region.

use std::time::{Duration, Instant};

/// Start/stop stopwatch over [`Instant`], which never goes backwards
/// under wall-clock adjustments.
///
/// Reading a timer that was never started or never stopped yields zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScopedTimer {
    started: Option<Instant>,
    stopped: Option<Instant>,
}

impl ScopedTimer {
    /// A timer that is already running.
    pub fn started() -> Self {
        let mut timer = Self::default();
        timer.start();
        timer
    }

    /// Record the start timestamp, clearing any previous stop.
    #[inline]
    pub fn start(&mut self) {
        self.stopped = None;
        self.started = Some(Instant::now());
    }

    /// Record the stop timestamp.
    #[inline]
    pub fn stop(&mut self) {
        self.stopped = Some(Instant::now());
    }

    /// Time between start and stop.
    pub fn elapsed(&self) -> Duration {
        match (self.started, self.stopped) {
            (Some(start), Some(stop)) => stop.saturating_duration_since(start),
            _ => Duration::ZERO,
        }
    }

    /// Time between start and stop in fractional milliseconds.
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1e3
    }
}
