//! Deterministic value streams for record coordinates and filler sizes.
//!
//! Two independent generators drive every scenario:
//!
//! - [`CoordinateStream`] yields `f32` coordinates uniform in `[-1.0, 1.0)`.
//! - [`FillerSizeStream`] yields filler buffer sizes uniform in a
//!   [`FillerRange`] (default `1..=64` bytes).
//!
//! Each wraps its own seeded `ChaCha8Rng`. Reseeding one stream restores
//! its sequence from the start regardless of how many values the other
//! has produced, which lets scenarios that rebuild the dataset replay the
//! exact same geometry while filler sizing keeps advancing.

use rand::distr::{Distribution, Uniform};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::StreamError;

/// Inclusive bounds for interstitial filler allocation sizes, in bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FillerRange {
    /// Smallest filler size (inclusive). Must be at least 1.
    pub min: u32,
    /// Largest filler size (inclusive). Must be `>= min`.
    pub max: u32,
}

impl FillerRange {
    /// Small fillers that nudge the allocator forward: `1..=64` bytes.
    pub const NARROW: FillerRange = FillerRange { min: 1, max: 64 };

    /// Large fillers that push records onto separate cache lines:
    /// `128..=1024` bytes. Not used by the default run.
    pub const WIDE: FillerRange = FillerRange {
        min: 128,
        max: 1024,
    };

    /// Check that the range is non-empty and excludes zero-sized fillers.
    pub fn validate(&self) -> Result<(), StreamError> {
        if self.min == 0 || self.min > self.max {
            return Err(StreamError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Whether `size` falls inside the range.
    pub fn contains(&self, size: usize) -> bool {
        (self.min as usize..=self.max as usize).contains(&size)
    }
}

impl Default for FillerRange {
    fn default() -> Self {
        Self::NARROW
    }
}

/// Seeded generator for triangle vertex coordinates.
#[derive(Clone, Debug)]
pub struct CoordinateStream {
    seed: u64,
    rng: ChaCha8Rng,
}

impl CoordinateStream {
    /// Create a stream positioned at the start of `seed`'s sequence.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw the next coordinate, uniform in `[-1.0, 1.0)`.
    ///
    /// Sampled in `f64` and narrowed, so the endpoint `1.0` can only be
    /// reached through rounding.
    pub fn next_coordinate(&mut self) -> f32 {
        let unit: f64 = self.rng.random();
        (unit * 2.0 - 1.0) as f32
    }

    /// Rewind to the start of the sequence for the original seed.
    pub fn reseed(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
    }

    /// The seed this stream was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

/// Seeded generator for filler allocation sizes.
#[derive(Clone, Debug)]
pub struct FillerSizeStream {
    seed: u64,
    range: FillerRange,
    dist: Uniform<u32>,
    rng: ChaCha8Rng,
}

impl FillerSizeStream {
    /// Create a stream of sizes uniform in `range`.
    ///
    /// # Errors
    ///
    /// Returns [`StreamError::InvalidRange`] if `range.min` is zero or
    /// greater than `range.max`.
    pub fn new(seed: u64, range: FillerRange) -> Result<Self, StreamError> {
        range.validate()?;
        let dist = Uniform::new_inclusive(range.min, range.max).map_err(|_| {
            StreamError::InvalidRange {
                min: range.min,
                max: range.max,
            }
        })?;
        Ok(Self {
            seed,
            range,
            dist,
            rng: ChaCha8Rng::seed_from_u64(seed),
        })
    }

    /// Draw the next filler size in bytes.
    pub fn next_size(&mut self) -> usize {
        self.dist.sample(&mut self.rng) as usize
    }

    /// Rewind to the start of the sequence for the original seed.
    pub fn reseed(&mut self) {
        self.rng = ChaCha8Rng::seed_from_u64(self.seed);
    }

    /// The seed this stream was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The size bounds this stream samples from.
    pub fn range(&self) -> FillerRange {
        self.range
    }
}
