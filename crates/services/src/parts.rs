//! Per-part Listening series using the approximate 5-9 scoring heuristic.

use tracker_core::model::{AttemptRecord, Part, TestRef};

use crate::aggregate::by_test_part;

/// Approximate scores for one part, aligned over the shared test axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PartSeries {
    pub part: Part,
    /// One slot per test in `PartSeriesSet::tests`; `None` marks a test the
    /// part has no data for, so a chart shows a gap instead of a false dip
    /// to zero.
    pub points: Vec<Option<f64>>,
}

/// All per-part series over a common, composite-ordered test axis.
#[derive(Debug, Clone, PartialEq)]
pub struct PartSeriesSet {
    pub tests: Vec<TestRef>,
    pub series: Vec<PartSeries>,
}

impl PartSeriesSet {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

/// Build the Listening per-part series from raw records.
#[must_use]
pub fn build_part_series(records: &[AttemptRecord]) -> PartSeriesSet {
    let groups = by_test_part(records);

    let mut tests: Vec<TestRef> = groups.iter().map(|g| g.test).collect();
    tests.sort_by_key(|t| t.sort_key());
    tests.dedup();

    let mut parts: Vec<Part> = groups.iter().map(|g| g.part).collect();
    parts.sort_unstable();
    parts.dedup();

    let series = parts
        .into_iter()
        .map(|part| {
            let points = tests
                .iter()
                .map(|test| {
                    groups
                        .iter()
                        .find(|g| g.part == part && g.test == *test)
                        .map(|g| g.part_score())
                })
                .collect();
            PartSeries { part, points }
        })
        .collect();

    PartSeriesSet { tests, series }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
