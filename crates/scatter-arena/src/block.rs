//! The contiguous record block and dense references into it.
//!
//! [`RecordBlock`] is the densely packed baseline layout. [`RecordRefs`]
//! adds one level of indirection while keeping both the references and
//! the records they point at contiguous.

use scatter_core::{CoordinateStream, Triangle};

use crate::error::ArenaError;
use crate::raw::reserve_exact;

/// `count` triangles stored back to back in a single allocation.
#[derive(Debug)]
pub struct RecordBlock {
    records: Vec<Triangle>,
}

impl RecordBlock {
    /// Draw `count` triangles from `stream` into one dense block.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::AllocationFailed`] if the block cannot be
    /// reserved up front.
    pub fn generate(count: usize, stream: &mut CoordinateStream) -> Result<Self, ArenaError> {
        let mut records = reserve_exact("record block", count)?;
        records.extend((0..count).map(|_| Triangle::generate(stream)));
        Ok(Self { records })
    }

    /// The records in storage order.
    pub fn as_slice(&self) -> &[Triangle] {
        &self.records
    }

    /// The record at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&Triangle> {
        self.records.get(index)
    }

    /// Iterate over the records in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.records.iter()
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the block holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Bytes occupied by the record payload.
    pub fn memory_bytes(&self) -> usize {
        self.records.len() * std::mem::size_of::<Triangle>()
    }
}

/// Dense references to every record of a [`RecordBlock`], in order.
#[derive(Debug)]
pub struct RecordRefs<'a> {
    refs: Vec<&'a Triangle>,
}

impl<'a> RecordRefs<'a> {
    /// Borrow each record of `block`.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::AllocationFailed`] if the reference vector
    /// cannot be reserved.
    pub fn borrow_all(block: &'a RecordBlock) -> Result<Self, ArenaError> {
        let mut refs = reserve_exact("record references", block.len())?;
        refs.extend(block.iter());
        Ok(Self { refs })
    }

    /// Iterate over the referenced records.
    pub fn iter(&self) -> impl Iterator<Item = &'a Triangle> + '_ {
        self.refs.iter().copied()
    }

    /// Number of references.
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// Whether there are no references.
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }
}
