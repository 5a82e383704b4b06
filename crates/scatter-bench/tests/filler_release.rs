//! Filler buffers are freed before the next scenario begins.
//!
//! Runs under a counting global allocator, so this file holds a single
//! test: a parallel sibling would perturb the counts.

use scatter_bench::{LayoutScenarioBuilder, Scenario};
use scatter_test_utils::{small_config, CountingAllocator};

#[global_allocator]
static ALLOC: CountingAllocator = CountingAllocator;

const RECORDS: usize = 2_000;

#[test]
fn filler_allocations_released_at_scenario_boundaries() {
    let mut builder = LayoutScenarioBuilder::new(&small_config(RECORDS)).unwrap();
    let block = builder.record_block().unwrap();

    // ── Scenario D: boxed records + fillers ───────────────────────
    let before_d = CountingAllocator::live_allocations();
    let mut d = builder.very_scattered_refs().unwrap();
    let built_d = CountingAllocator::live_allocations();
    // Record vector + one box per record + pool vector + one filler per record.
    assert!(built_d - before_d >= 2 * RECORDS + 2);
    assert_eq!(d.outstanding_fillers(), RECORDS);

    let area_d = d.scan();
    assert_eq!(d.release_fillers(), RECORDS);
    let after_d = CountingAllocator::live_allocations();
    // Every filler and the pool's own vector are gone.
    assert_eq!(built_d - after_d, RECORDS + 1);
    // The boxed records and their reference vector stay.
    assert!(after_d - before_d >= RECORDS + 1);

    // ── Scenario E: boxed cells + fillers ─────────────────────────
    let mut e = builder.scattered_cells(&block).unwrap();
    let built_e = CountingAllocator::live_allocations();
    assert!(built_e - after_d >= 2 * RECORDS + 2);

    let area_e = e.scan();
    assert_eq!(e.release_fillers(), RECORDS);
    let after_e = CountingAllocator::live_allocations();
    assert_eq!(built_e - after_e, RECORDS + 1);
    assert!(after_e - after_d >= RECORDS + 1);

    // Releasing again frees nothing further.
    assert_eq!(d.release_fillers(), 0);
    assert_eq!(e.release_fillers(), 0);
    assert_eq!(CountingAllocator::live_allocations(), after_e);

    assert_eq!(area_d, area_e);

    // Dropping the scenarios frees the retained records and cells.
    drop(e);
    drop(d);
    let after_drop = CountingAllocator::live_allocations();
    assert!(after_e - after_drop >= 2 * (RECORDS + 1));
}
