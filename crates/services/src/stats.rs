//! Per-question-type accuracy and timing table.

use std::collections::BTreeMap;

use tracker_core::band::accuracy;
use tracker_core::model::{AttemptRecord, Module, Part};

use crate::aggregate::Sums;

/// One row of the question-type statistics table.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsRow {
    pub module: Module,
    pub question_type: String,
    /// Set for Listening rows (grouped per part); `None` for Reading.
    pub part: Option<Part>,
    pub correct: u32,
    pub total: u32,
    /// `100 * correct / total`; callers display one decimal place.
    pub accuracy: f64,
    /// Mean per-question minutes; Reading rows only.
    pub avg_time: Option<f64>,
}

/// Build the question-type statistics table.
///
/// Listening records group by (question type, part); Reading records group
/// by question type alone, and only those carrying a timing value take part
/// at all, so an untimed record can neither corrupt the mean nor be counted
/// as zero time. Zero-total rows are omitted. Rows come out Listening first,
/// then Reading, alphabetical by question type (and part) within a module.
#[must_use]
pub fn question_type_stats(records: &[AttemptRecord]) -> Vec<StatsRow> {
    let mut rows = Vec::new();

    for module in Module::ALL {
        let mut groups: BTreeMap<(String, Option<Part>), Sums> = BTreeMap::new();
        for record in records.iter().filter(|r| r.module() == module) {
            if module == Module::Reading && record.avg_time_per_q().is_none() {
                continue;
            }
            let part = match module {
                Module::Listening => record.part(),
                Module::Reading => None,
            };
            groups
                .entry((record.question_type().to_owned(), part))
                .or_default()
                .add(record);
        }

        for ((question_type, part), sums) in groups {
            if sums.total == 0 {
                continue;
            }
            let avg_time = match module {
                Module::Reading => sums.mean_time(),
                Module::Listening => None,
            };
            rows.push(StatsRow {
                module,
                question_type,
                part,
                correct: sums.correct,
                total: sums.total,
                accuracy: accuracy(sums.correct, sums.total),
                avg_time,
            });
        }
    }

    rows
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
