//! BenchmarkRunner invocation counts and timing proportionality.

use std::num::NonZeroU32;
use std::time::Duration;

use scatter_bench::{BenchmarkRunner, Iteration, LayoutScenarioBuilder, Scenario};
use scatter_test_utils::{small_config, CountingWorkload, DelayWorkload};

fn runner(measured: u32, warmup: u32) -> BenchmarkRunner {
    BenchmarkRunner::new(NonZeroU32::new(measured).unwrap(), warmup)
}

#[test]
fn invokes_workload_measured_plus_warmup_times() {
    let mut workload = CountingWorkload::new();
    runner(5, 2).run(|it| workload.call(it));
    assert_eq!(workload.total(), 7);
    assert_eq!(workload.warmup_calls(), 2);
    assert_eq!(workload.measured_calls(), 5);
}

#[test]
fn warmup_precedes_measurement() {
    let mut workload = CountingWorkload::new();
    runner(3, 1).run(|it| workload.call(it));
    assert_eq!(
        workload.seen(),
        &[
            Iteration::Warmup(0),
            Iteration::Measured(0),
            Iteration::Measured(1),
            Iteration::Measured(2),
        ]
    );
}

#[test]
fn mean_tracks_injected_delay() {
    let delay = Duration::from_millis(2);
    let workload = DelayWorkload::new(delay);
    let m = runner(4, 1).run(|it| workload.call(it));
    assert!(m.mean() >= delay, "mean {:?} below delay {delay:?}", m.mean());
    assert!(m.mean_ms() >= 2.0);
}

#[test]
fn mean_scales_with_delay() {
    let short = DelayWorkload::new(Duration::from_millis(1));
    let long = DelayWorkload::new(Duration::from_millis(8));
    let r = runner(3, 1);
    let m_short = r.run(|it| short.call(it));
    let m_long = r.run(|it| long.call(it));
    assert!(m_long.mean() >= Duration::from_millis(8));
    assert!(m_long.mean() > m_short.mean());
}

#[test]
fn total_scales_with_measured_count() {
    let workload = DelayWorkload::new(Duration::from_millis(1));
    let one = runner(1, 0).run(|it| workload.call(it));
    let six = runner(6, 0).run(|it| workload.call(it));
    assert!(six.total() >= Duration::from_millis(6));
    assert!(six.total() > one.total());
}

#[test]
fn scan_time_scales_with_dataset_and_is_not_eliminated() {
    // A scan the optimiser deleted would time at ~0 regardless of size.
    let measure = |n: usize| {
        let mut builder = LayoutScenarioBuilder::new(&small_config(n)).unwrap();
        let block = builder.record_block().unwrap();
        let scenario = builder.contiguous(&block);
        runner(5, 1).run(|_| {
            scenario.scan();
        })
    };

    let small = measure(1_000);
    let large = measure(400_000);
    assert!(small.mean() > Duration::ZERO);
    assert!(large.mean() > small.mean());
}
