//! Double indirection: scattered reference cells into a contiguous block.
//!
//! A [`CellList`] owns one heap cell per record. Each cell holds a
//! reference into a [`RecordBlock`], so reaching a record costs two hops:
//! the dense cell vector, then the scattered cell, then the dense block.
//! Cells and records are separate ownership domains; the `'a` lifetime
//! ties every cell to the block it borrows from.

use scatter_core::{FillerSizeStream, Triangle};

use crate::block::RecordBlock;
use crate::error::ArenaError;
use crate::filler::FillerPool;
use crate::raw::reserve_exact;

/// A single heap-allocated pointer to a record in a [`RecordBlock`].
#[derive(Clone, Copy, Debug)]
pub struct RecordCell<'a> {
    record: &'a Triangle,
}

impl<'a> RecordCell<'a> {
    /// The record this cell points at.
    #[inline]
    pub fn record(&self) -> &'a Triangle {
        self.record
    }
}

/// Dense vector of individually boxed [`RecordCell`]s.
#[derive(Debug)]
pub struct CellList<'a> {
    cells: Vec<Box<RecordCell<'a>>>,
}

impl<'a> CellList<'a> {
    /// Box one cell per record of `block`, allocating one filler into
    /// `fillers` right after each cell with a size drawn from `sizes`.
    ///
    /// # Errors
    ///
    /// Returns [`ArenaError::AllocationFailed`] if the cell vector cannot
    /// be reserved.
    pub fn link_interleaved(
        block: &'a RecordBlock,
        fillers: &mut FillerPool,
        sizes: &mut FillerSizeStream,
    ) -> Result<Self, ArenaError> {
        let mut cells = reserve_exact("record cells", block.len())?;
        for record in block.iter() {
            cells.push(Box::new(RecordCell { record }));
            fillers.allocate(sizes.next_size());
        }
        Ok(Self { cells })
    }

    /// Iterate over the records, following each cell.
    pub fn iter(&self) -> impl Iterator<Item = &'a Triangle> + '_ {
        self.cells.iter().map(|cell| cell.record())
    }

    /// Iterate over the cells themselves.
    pub fn cells(&self) -> impl Iterator<Item = &RecordCell<'a>> + '_ {
        self.cells.iter().map(|cell| &**cell)
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether there are no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
