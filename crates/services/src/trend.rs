//! Time-ordered band-score series for one module.

use chrono::Timelike;

use tracker_core::model::{AttemptRecord, Module, TestRef};

use crate::aggregate::by_test;

/// Hour used when no attempt time can be resolved for a group.
const DEFAULT_HOUR: u32 = 12;

/// One point of the band-score trend.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub test: TestRef,
    pub band: f64,
    /// Hour of day of the group's first-inserted attempt, used by the
    /// presentation layer for time-of-day coloring.
    pub hour: u32,
}

/// Band-score trend for one module, ordered by the composite book-test key.
#[derive(Debug, Clone, PartialEq)]
pub struct TrendSeries {
    pub points: Vec<TrendPoint>,
    /// Arithmetic mean of the band scores; the presentation layer draws it
    /// as a reference baseline. 0.0 for an empty series.
    pub average: f64,
}

impl TrendSeries {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Build the band-score trend for `module`.
///
/// Each group's band score comes from the lookup table applied to the
/// group's summed correct count. The representative hour is taken from the
/// first matching record in insertion order, not the earliest clock time.
#[must_use]
pub fn build_trend(records: &[AttemptRecord], module: Module) -> TrendSeries {
    let groups = by_test(records, module);

    let points: Vec<TrendPoint> = groups
        .iter()
        .map(|group| TrendPoint {
            test: group.test,
            band: group.band_score(),
            hour: representative_hour(records, module, group.test),
        })
        .collect();

    let average = if points.is_empty() {
        0.0
    } else {
        points.iter().map(|p| p.band).sum::<f64>() / points.len() as f64
    };

    TrendSeries { points, average }
}

fn representative_hour(records: &[AttemptRecord], module: Module, test: TestRef) -> u32 {
    records
        .iter()
        .find(|r| r.module() == module && r.test() == test)
        .map_or(DEFAULT_HOUR, |r| r.time().hour())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
