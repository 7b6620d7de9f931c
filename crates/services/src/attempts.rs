//! Record entry and deletion over the record store.

use std::sync::Arc;

use chrono::Timelike;
use tracing::info;

use storage::RecordStore;
use tracker_core::Clock;
use tracker_core::model::{AttemptDraft, AttemptRecord};

use crate::error::AttemptServiceError;

/// Validates, timestamps, and persists practice attempts.
pub struct AttemptService {
    store: Arc<dyn RecordStore>,
    clock: Clock,
}

impl AttemptService {
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self::with_clock(store, Clock::default_clock())
    }

    #[must_use]
    pub fn with_clock(store: Arc<dyn RecordStore>, clock: Clock) -> Self {
        Self { store, clock }
    }

    /// Validate a draft, stamp it with the current date and time (minute
    /// precision, matching the stored `HH:MM` format), and append it.
    ///
    /// # Errors
    ///
    /// Returns `AttemptServiceError::Attempt` when the draft violates a
    /// record invariant, or `AttemptServiceError::Storage` when the store
    /// cannot be written.
    pub fn add(&self, draft: AttemptDraft) -> Result<AttemptRecord, AttemptServiceError> {
        let now = self.clock.now();
        let time = now
            .time()
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or_else(|| now.time());
        let record = draft.validate(now.date_naive(), time)?;
        self.store.append(&record)?;
        info!(test = %record.test(), module = %record.module(), "attempt recorded");
        Ok(record)
    }

    /// All records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `AttemptServiceError::Storage` when the store cannot be read.
    pub fn list(&self) -> Result<Vec<AttemptRecord>, AttemptServiceError> {
        Ok(self.store.load()?)
    }

    /// Delete the record at the given list position.
    ///
    /// # Errors
    ///
    /// Returns `AttemptServiceError::Storage` when the position is out of
    /// range or the store cannot be rewritten.
    pub fn delete(&self, index: usize) -> Result<(), AttemptServiceError> {
        self.store.delete_at(index)?;
        info!(index, "attempt deleted");
        Ok(())
    }

    /// One-line descriptions of every record, for a delete-by-selection list.
    ///
    /// # Errors
    ///
    /// Returns `AttemptServiceError::Storage` when the store cannot be read.
    pub fn summaries(&self) -> Result<Vec<String>, AttemptServiceError> {
        let records = self.list()?;
        Ok(records.iter().map(describe).collect())
    }
}

fn describe(record: &AttemptRecord) -> String {
    let part = record
        .part()
        .map_or_else(|| "-".to_string(), |p| p.to_string());
    format!(
        "{} {} Part:{} {} Correct:{}/{}",
        record.test(),
        record.module(),
        part,
        record.question_type(),
        record.correct(),
        record.total_questions()
    )
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
