//! Multi-key grouping of attempt records into summed aggregates.

use std::collections::BTreeMap;

use tracker_core::band::{accuracy, band_score, part_score};
use tracker_core::model::{AttemptRecord, Module, Part, TestRef};

/// Summed results for one book-test pair within a module.
#[derive(Debug, Clone, PartialEq)]
pub struct TestAggregate {
    pub test: TestRef,
    pub correct: u32,
    pub total: u32,
    /// Mean per-question time over the records that carry one (Reading).
    pub avg_time_per_q: Option<f64>,
}

impl TestAggregate {
    /// Band score from the summed correct count via the lookup table.
    #[must_use]
    pub fn band_score(&self) -> f64 {
        band_score(i64::from(self.correct))
    }

    #[must_use]
    pub fn accuracy(&self) -> f64 {
        accuracy(self.correct, self.total)
    }
}

/// Summed results for one (book-test, part) pair of the Listening module.
#[derive(Debug, Clone, PartialEq)]
pub struct PartAggregate {
    pub test: TestRef,
    pub part: Part,
    pub correct: u32,
    pub total: u32,
}

impl PartAggregate {
    /// Approximate per-part band score (linear 5-9 heuristic, not the table).
    #[must_use]
    pub fn part_score(&self) -> f64 {
        part_score(self.correct, self.total)
    }

    #[must_use]
    pub fn accuracy(&self) -> f64 {
        accuracy(self.correct, self.total)
    }
}

/// Running sums for one group.
#[derive(Debug, Default, Clone)]
pub(crate) struct Sums {
    pub correct: u32,
    pub total: u32,
    time_sum: f64,
    timed: u32,
}

impl Sums {
    pub(crate) fn add(&mut self, record: &AttemptRecord) {
        self.correct = self.correct.saturating_add(record.correct());
        self.total = self.total.saturating_add(record.total_questions());
        // Records without a time value contribute nothing to the mean;
        // absent is not zero.
        if let Some(avg) = record.avg_time_per_q() {
            self.time_sum += avg;
            self.timed += 1;
        }
    }

    pub(crate) fn mean_time(&self) -> Option<f64> {
        (self.timed > 0).then(|| self.time_sum / f64::from(self.timed))
    }
}

/// Group one module's records by book-test pair, summing correct and total.
///
/// Zero-total groups are dropped (they cannot be scored or displayed), and
/// the output is ordered by the composite `TestRef::sort_key`.
#[must_use]
pub fn by_test(records: &[AttemptRecord], module: Module) -> Vec<TestAggregate> {
    let mut groups: BTreeMap<TestRef, Sums> = BTreeMap::new();
    for record in records.iter().filter(|r| r.module() == module) {
        groups.entry(record.test()).or_default().add(record);
    }

    let mut out: Vec<TestAggregate> = groups
        .into_iter()
        .filter(|(_, sums)| sums.total > 0)
        .map(|(test, sums)| TestAggregate {
            test,
            correct: sums.correct,
            total: sums.total,
            avg_time_per_q: sums.mean_time(),
        })
        .collect();
    out.sort_by_key(|group| group.test.sort_key());
    out
}

/// Group Listening records by (book-test, part).
///
/// Records without a part number (there should be none for Listening) are
/// skipped. Same zero-total filtering and composite ordering as `by_test`.
#[must_use]
pub fn by_test_part(records: &[AttemptRecord]) -> Vec<PartAggregate> {
    let mut groups: BTreeMap<(TestRef, Part), Sums> = BTreeMap::new();
    for record in records.iter().filter(|r| r.module() == Module::Listening) {
        let Some(part) = record.part() else { continue };
        groups.entry((record.test(), part)).or_default().add(record);
    }

    let mut out: Vec<PartAggregate> = groups
        .into_iter()
        .filter(|(_, sums)| sums.total > 0)
        .map(|((test, part), sums)| PartAggregate {
            test,
            part,
            correct: sums.correct,
            total: sums.total,
        })
        .collect();
    out.sort_by_key(|group| (group.test.sort_key(), group.part));
    out
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
