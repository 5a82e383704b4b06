//! Per-scenario results of a run.

use crate::scenario::ScenarioKind;

/// Timing and checksum for one scenario.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioReport {
    /// Which layout was measured.
    pub kind: ScenarioKind,
    /// Mean time per full pass, in milliseconds.
    pub mean_ms: f64,
    /// Area sum produced by the last measured pass.
    pub area_sum: f32,
    /// Filler buffers released after the timed run.
    pub fillers_released: usize,
}

/// All scenario reports of one run, in run order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunSummary {
    /// Individual reports.
    pub reports: Vec<ScenarioReport>,
}

impl RunSummary {
    /// The report for `kind`, if that scenario ran.
    pub fn get(&self, kind: ScenarioKind) -> Option<&ScenarioReport> {
        self.reports.iter().find(|r| r.kind == kind)
    }

    /// Largest relative difference between any scenario's area sum and
    /// the first scenario's. Zero when fewer than two scenarios ran.
    pub fn max_relative_area_spread(&self) -> f64 {
        let Some(first) = self.reports.first() else {
            return 0.0;
        };
        let baseline = f64::from(first.area_sum);
        let scale = baseline.abs().max(f64::MIN_POSITIVE);
        self.reports
            .iter()
            .map(|r| (f64::from(r.area_sum) - baseline).abs() / scale)
            .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(kind: ScenarioKind, area_sum: f32) -> ScenarioReport {
        ScenarioReport {
            kind,
            mean_ms: 1.0,
            area_sum,
            fillers_released: 0,
        }
    }

    #[test]
    fn empty_summary_has_no_spread() {
        assert_eq!(RunSummary::default().max_relative_area_spread(), 0.0);
    }

    #[test]
    fn spread_is_relative_to_first() {
        let summary = RunSummary {
            reports: vec![
                report(ScenarioKind::Contiguous, 100.0),
                report(ScenarioKind::ContiguousRefs, 100.0),
                report(ScenarioKind::ScatteredRefs, 101.0),
            ],
        };
        assert!((summary.max_relative_area_spread() - 0.01).abs() < 1e-9);
    }

    #[test]
    fn get_finds_by_kind() {
        let summary = RunSummary {
            reports: vec![report(ScenarioKind::ScatteredCells, 3.0)],
        };
        assert_eq!(summary.get(ScenarioKind::ScatteredCells).unwrap().area_sum, 3.0);
        assert!(summary.get(ScenarioKind::Contiguous).is_none());
    }
}
