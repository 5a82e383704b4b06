//! The five memory layouts of the benchmark dataset.
//!
//! Every scenario holds the same logical sequence of triangles and can sum
//! their areas in its own physical order:
//!
//! | Kind | Arrangement |
//! |------|-------------|
//! | [`Contiguous`](ScenarioKind::Contiguous) | records in one dense block |
//! | [`ContiguousRefs`](ScenarioKind::ContiguousRefs) | dense refs into that block |
//! | [`ScatteredRefs`](ScenarioKind::ScatteredRefs) | dense refs to individually boxed records |
//! | [`VeryScatteredRefs`](ScenarioKind::VeryScatteredRefs) | as above, a filler after every record |
//! | [`ScatteredCells`](ScenarioKind::ScatteredCells) | dense refs to boxed cells, a filler after every cell, each cell pointing into the block |
//!
//! [`LayoutScenarioBuilder`] owns both deterministic streams and constructs
//! each layout. Scenarios that rebuild records reseed the coordinate
//! stream first; the filler-size stream is never reseeded, so sizes keep
//! advancing from one scenario to the next.

use std::fmt;

use scatter_arena::{
    ArenaError, CellList, FillerPool, RecordBlock, RecordRefs, ScatteredRecords,
};
use scatter_core::{observe, CoordinateStream, FillerSizeStream, Triangle};
use tracing::debug;

use crate::config::{BenchConfig, ConfigError};

/// Identifies one of the five layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScenarioKind {
    /// Records in one dense block.
    Contiguous,
    /// Dense references into the contiguous block.
    ContiguousRefs,
    /// Dense references to individually allocated records.
    ScatteredRefs,
    /// Dense references to individually allocated records separated by fillers.
    VeryScatteredRefs,
    /// Dense references to scattered cells that point into the contiguous block.
    ScatteredCells,
}

impl ScenarioKind {
    /// All kinds, in run order.
    pub const ALL: [ScenarioKind; 5] = [
        Self::Contiguous,
        Self::ContiguousRefs,
        Self::ScatteredRefs,
        Self::VeryScatteredRefs,
        Self::ScatteredCells,
    ];

    /// Human-readable description printed before each measurement.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Contiguous => "Contiguous data",
            Self::ContiguousRefs => "Contiguous pointers to contiguous data",
            Self::ScatteredRefs => "Contiguous pointers to scattered data",
            Self::VeryScatteredRefs => "Contiguous pointers to very scattered data",
            Self::ScatteredCells => {
                "Contiguous pointers to very scattered pointers to contiguous data"
            }
        }
    }

    /// Whether this layout interleaves filler allocations.
    pub fn uses_fillers(&self) -> bool {
        matches!(self, Self::VeryScatteredRefs | Self::ScatteredCells)
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A constructed layout that can be scanned.
pub trait Scenario {
    /// Which layout this is.
    fn kind(&self) -> ScenarioKind;

    /// Number of logical records reachable from this layout.
    fn len(&self) -> usize;

    /// Whether the layout holds no records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sum of [`Triangle::area`] over every record, in physical order.
    fn area_sum(&self) -> f32;

    /// One full pass: sum the areas and feed the result through [`observe`].
    fn scan(&self) -> f32 {
        observe(self.area_sum())
    }

    /// Filler buffers currently held by this layout.
    fn outstanding_fillers(&self) -> usize {
        0
    }

    /// Free this layout's filler buffers. Returns how many were released.
    fn release_fillers(&mut self) -> usize {
        0
    }
}

/// Left-to-right `f32` accumulation, identical across layouts for the same
/// record order.
#[inline]
fn sum_areas<'t>(records: impl Iterator<Item = &'t Triangle>) -> f32 {
    records.fold(0.0, |acc, t| acc + t.area())
}

// ── Scenario A ─────────────────────────────────────────────────────

/// Layout A: scans the [`RecordBlock`] directly.
pub struct ContiguousScenario<'a> {
    block: &'a RecordBlock,
}

impl Scenario for ContiguousScenario<'_> {
    fn kind(&self) -> ScenarioKind {
        ScenarioKind::Contiguous
    }

    fn len(&self) -> usize {
        self.block.len()
    }

    fn area_sum(&self) -> f32 {
        sum_areas(self.block.iter())
    }
}

// ── Scenario B ─────────────────────────────────────────────────────

/// Layout B: dense references into the [`RecordBlock`].
pub struct ContiguousRefsScenario<'a> {
    refs: RecordRefs<'a>,
}

impl Scenario for ContiguousRefsScenario<'_> {
    fn kind(&self) -> ScenarioKind {
        ScenarioKind::ContiguousRefs
    }

    fn len(&self) -> usize {
        self.refs.len()
    }

    fn area_sum(&self) -> f32 {
        sum_areas(self.refs.iter())
    }
}

// ── Scenario C ─────────────────────────────────────────────────────

/// Layout C: dense references to individually boxed records.
pub struct ScatteredRefsScenario {
    records: ScatteredRecords,
}

impl Scenario for ScatteredRefsScenario {
    fn kind(&self) -> ScenarioKind {
        ScenarioKind::ScatteredRefs
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn area_sum(&self) -> f32 {
        sum_areas(self.records.iter())
    }
}

// ── Scenario D ─────────────────────────────────────────────────────

/// Layout D: boxed records, each followed by a filler allocation.
pub struct VeryScatteredRefsScenario {
    records: ScatteredRecords,
    fillers: FillerPool,
}

impl Scenario for VeryScatteredRefsScenario {
    fn kind(&self) -> ScenarioKind {
        ScenarioKind::VeryScatteredRefs
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn area_sum(&self) -> f32 {
        sum_areas(self.records.iter())
    }

    fn outstanding_fillers(&self) -> usize {
        self.fillers.outstanding()
    }

    fn release_fillers(&mut self) -> usize {
        self.fillers.release()
    }
}

// ── Scenario E ─────────────────────────────────────────────────────

/// Layout E: boxed cells pointing into the [`RecordBlock`], each cell
/// followed by a filler allocation.
pub struct ScatteredCellsScenario<'a> {
    cells: CellList<'a>,
    fillers: FillerPool,
}

impl Scenario for ScatteredCellsScenario<'_> {
    fn kind(&self) -> ScenarioKind {
        ScenarioKind::ScatteredCells
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn area_sum(&self) -> f32 {
        sum_areas(self.cells.iter())
    }

    fn outstanding_fillers(&self) -> usize {
        self.fillers.outstanding()
    }

    fn release_fillers(&mut self) -> usize {
        self.fillers.release()
    }
}

// ── LayoutScenarioBuilder ──────────────────────────────────────────

/// Constructs the five layouts over one logical dataset.
#[derive(Debug)]
pub struct LayoutScenarioBuilder {
    record_count: usize,
    coords: CoordinateStream,
    sizes: FillerSizeStream,
}

impl LayoutScenarioBuilder {
    /// Builder with fresh streams seeded from `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` fails validation.
    pub fn new(config: &BenchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            record_count: config.record_count,
            coords: CoordinateStream::new(config.seed),
            sizes: FillerSizeStream::new(config.seed, config.filler_sizes)?,
        })
    }

    /// Number of records every layout will hold.
    pub fn record_count(&self) -> usize {
        self.record_count
    }

    /// Generate the contiguous block shared by layouts A, B and E.
    pub fn record_block(&mut self) -> Result<RecordBlock, ArenaError> {
        self.coords.reseed();
        RecordBlock::generate(self.record_count, &mut self.coords)
    }

    /// Layout A over `block`.
    pub fn contiguous<'a>(&self, block: &'a RecordBlock) -> ContiguousScenario<'a> {
        ContiguousScenario { block }
    }

    /// Layout B over `block`.
    pub fn contiguous_refs<'a>(
        &self,
        block: &'a RecordBlock,
    ) -> Result<ContiguousRefsScenario<'a>, ArenaError> {
        Ok(ContiguousRefsScenario {
            refs: RecordRefs::borrow_all(block)?,
        })
    }

    /// Layout C: reseed and box every record.
    pub fn scattered_refs(&mut self) -> Result<ScatteredRefsScenario, ArenaError> {
        self.coords.reseed();
        Ok(ScatteredRefsScenario {
            records: ScatteredRecords::generate(self.record_count, &mut self.coords)?,
        })
    }

    /// Layout D: reseed and box every record, a filler after each.
    pub fn very_scattered_refs(&mut self) -> Result<VeryScatteredRefsScenario, ArenaError> {
        self.coords.reseed();
        let mut fillers = FillerPool::with_capacity(self.record_count)?;
        let records = ScatteredRecords::generate_interleaved(
            self.record_count,
            &mut self.coords,
            &mut fillers,
            &mut self.sizes,
        )?;
        debug!(
            fillers = fillers.outstanding(),
            bytes = fillers.outstanding_bytes(),
            "filler buffers allocated"
        );
        Ok(VeryScatteredRefsScenario { records, fillers })
    }

    /// Layout E over `block`: box one cell per record, a filler after each.
    pub fn scattered_cells<'a>(
        &mut self,
        block: &'a RecordBlock,
    ) -> Result<ScatteredCellsScenario<'a>, ArenaError> {
        let mut fillers = FillerPool::with_capacity(block.len())?;
        let cells = CellList::link_interleaved(block, &mut fillers, &mut self.sizes)?;
        debug!(
            fillers = fillers.outstanding(),
            bytes = fillers.outstanding_bytes(),
            "filler buffers allocated"
        );
        Ok(ScatteredCellsScenario { cells, fillers })
    }

    /// Build the layout for `kind`, borrowing `block` where needed.
    pub fn build<'a>(
        &mut self,
        kind: ScenarioKind,
        block: &'a RecordBlock,
    ) -> Result<Box<dyn Scenario + 'a>, ArenaError> {
        let scenario: Box<dyn Scenario + 'a> = match kind {
            ScenarioKind::Contiguous => Box::new(self.contiguous(block)),
            ScenarioKind::ContiguousRefs => Box::new(self.contiguous_refs(block)?),
            ScenarioKind::ScatteredRefs => Box::new(self.scattered_refs()?),
            ScenarioKind::VeryScatteredRefs => Box::new(self.very_scattered_refs()?),
            ScenarioKind::ScatteredCells => Box::new(self.scattered_cells(block)?),
        };
        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder(n: usize) -> LayoutScenarioBuilder {
        LayoutScenarioBuilder::new(&BenchConfig::with_record_count(n)).unwrap()
    }

    #[test]
    fn labels_in_run_order() {
        let labels: Vec<&str> = ScenarioKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels[0], "Contiguous data");
        assert_eq!(
            labels[4],
            "Contiguous pointers to very scattered pointers to contiguous data"
        );
        assert_eq!(ScenarioKind::ScatteredRefs.to_string(), labels[2]);
    }

    #[test]
    fn only_d_and_e_use_fillers() {
        let with: Vec<ScenarioKind> = ScenarioKind::ALL
            .into_iter()
            .filter(ScenarioKind::uses_fillers)
            .collect();
        assert_eq!(
            with,
            vec![ScenarioKind::VeryScatteredRefs, ScenarioKind::ScatteredCells]
        );
    }

    #[test]
    fn every_layout_holds_full_dataset() {
        let mut b = builder(500);
        let block = b.record_block().unwrap();
        for kind in ScenarioKind::ALL {
            let scenario = b.build(kind, &block).unwrap();
            assert_eq!(scenario.kind(), kind);
            assert_eq!(scenario.len(), 500);
            assert!(!scenario.is_empty());
        }
    }

    #[test]
    fn area_sums_identical_across_layouts() {
        let mut b = builder(1000);
        let block = b.record_block().unwrap();
        let expected = b.contiguous(&block).area_sum();
        assert!(expected > 0.0);
        for kind in ScenarioKind::ALL {
            let scenario = b.build(kind, &block).unwrap();
            // Same records in the same order, so the f32 sums match bit for bit.
            assert_eq!(scenario.area_sum().to_bits(), expected.to_bits(), "{kind}");
        }
    }

    #[test]
    fn scan_returns_area_sum() {
        let mut b = builder(100);
        let block = b.record_block().unwrap();
        let a = b.contiguous(&block);
        assert_eq!(a.scan(), a.area_sum());
    }

    #[test]
    fn filler_layouts_hold_one_filler_per_record() {
        let mut b = builder(300);
        let block = b.record_block().unwrap();

        let mut d = b.very_scattered_refs().unwrap();
        assert_eq!(d.outstanding_fillers(), 300);
        assert_eq!(d.release_fillers(), 300);
        assert_eq!(d.outstanding_fillers(), 0);

        let mut e = b.scattered_cells(&block).unwrap();
        assert_eq!(e.outstanding_fillers(), 300);
        assert_eq!(e.release_fillers(), 300);
        assert_eq!(e.outstanding_fillers(), 0);
    }

    #[test]
    fn records_survive_filler_release() {
        let mut b = builder(200);
        let block = b.record_block().unwrap();
        let expected = b.contiguous(&block).area_sum();
        let mut d = b.very_scattered_refs().unwrap();
        d.release_fillers();
        assert_eq!(d.area_sum(), expected);
    }

    #[test]
    fn layouts_without_fillers_report_none() {
        let mut b = builder(50);
        let block = b.record_block().unwrap();
        let mut c = b.scattered_refs().unwrap();
        assert_eq!(c.outstanding_fillers(), 0);
        assert_eq!(c.release_fillers(), 0);
        assert_eq!(b.contiguous(&block).outstanding_fillers(), 0);
    }

    #[test]
    fn rebuilding_block_reproduces_geometry() {
        let mut b = builder(64);
        let first = b.record_block().unwrap();
        let _ = b.very_scattered_refs().unwrap();
        let second = b.record_block().unwrap();
        assert_eq!(first.as_slice(), second.as_slice());
    }

    #[test]
    fn invalid_config_rejected() {
        let err = LayoutScenarioBuilder::new(&BenchConfig::with_record_count(0)).unwrap_err();
        assert_eq!(err, ConfigError::EmptyDataset);
    }
}
