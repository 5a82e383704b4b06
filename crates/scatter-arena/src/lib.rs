//! Record storage for the Scatter layout scenarios.
//!
//! Each type here owns (or borrows) the same logical sequence of
//! [`Triangle`](scatter_core::Triangle)s arranged differently in memory:
//!
//! ```text
//! RecordBlock ──────────── Vec<Triangle>              one dense block
//! ├── RecordRefs<'a> ───── Vec<&Triangle>             dense refs into the block
//! └── CellList<'a> ─────── Vec<Box<RecordCell>>       dense refs to scattered cells,
//!                          └── &Triangle              each cell pointing into the block
//! ScatteredRecords ─────── Vec<Box<Triangle>>         dense refs to scattered records
//! FillerPool ───────────── Vec<Box<[MaybeUninit<u8>]>> interstitial junk, released per scenario
//! ```
//!
//! # Ownership
//!
//! [`RecordBlock`] is the sole owner of the contiguous records; the two
//! borrowing layouts carry its lifetime so they cannot outlive it.
//! [`ScatteredRecords`] and [`CellList`] own their individual boxes for as
//! long as the scenario is retained. [`FillerPool`] buffers are never read
//! and are dropped by [`FillerPool::release`] or when the pool goes out
//! of scope.
//!
//! # Allocation failure
//!
//! Every bulk reservation goes through `try_reserve_exact` and surfaces
//! [`ArenaError::AllocationFailed`]. Individual boxes abort the process via
//! the global allocation error handler. Neither path can yield a
//! truncated dataset.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod block;
pub mod cells;
pub mod error;
pub mod filler;
mod raw;
pub mod scattered;

pub use block::{RecordBlock, RecordRefs};
pub use cells::{CellList, RecordCell};
pub use error::ArenaError;
pub use filler::FillerPool;
pub use scattered::ScatteredRecords;
