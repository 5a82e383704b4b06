//! Interstitial filler allocations.
//!
//! A [`FillerPool`] holds junk buffers allocated between record or cell
//! allocations to push the allocator forward and break spatial locality.
//! The buffers are never read or initialised. They belong to exactly one
//! scenario and are dropped by [`release`](FillerPool::release) once its
//! timed run is over, or when the pool itself is dropped on any other exit
//! path.

use std::mem::MaybeUninit;

use crate::error::ArenaError;
use crate::raw::reserve_exact;

/// Scoped collection of uninitialised filler buffers.
#[derive(Debug, Default)]
pub struct FillerPool {
    buffers: Vec<Box<[MaybeUninit<u8>]>>,
    bytes: usize,
}

impl FillerPool {
    /// Create an empty pool with room to track `count` buffers.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::AllocationFailed`] if the tracking vector
    /// cannot be reserved.
    pub fn with_capacity(count: usize) -> Result<Self, ArenaError> {
        Ok(Self {
            buffers: reserve_exact("filler pool", count)?,
            bytes: 0,
        })
    }

    /// Allocate one filler buffer of `size` bytes and keep it alive.
    pub fn allocate(&mut self, size: usize) {
        self.buffers.push(Box::<[u8]>::new_uninit_slice(size));
        self.bytes += size;
    }

    /// Number of buffers currently held.
    pub fn outstanding(&self) -> usize {
        self.buffers.len()
    }

    /// Total bytes across all held buffers.
    pub fn outstanding_bytes(&self) -> usize {
        self.bytes
    }

    /// Free every buffer, including the tracking vector itself.
    ///
    /// Returns the number of buffers released.
    pub fn release(&mut self) -> usize {
        let released = self.buffers.len();
        self.buffers = Vec::new();
        self.bytes = 0;
        released
    }
}
