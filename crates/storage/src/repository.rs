use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use thiserror::Error;

use tracker_core::model::{AttemptRecord, Module, Part, TestRef};

/// Errors surfaced by record store adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),

    #[error("malformed record at row {row}: {reason}")]
    Malformed { row: usize, reason: String },

    #[error("no record at position {index} (store holds {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("i/o error: {0}")]
    Io(String),
}

/// Errors converting a persisted row back into a domain record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RowError {
    #[error("invalid time of day: {0:?}")]
    Time(String),
}

/// Persisted shape for one attempt, matching the canonical CSV columns.
///
/// This mirrors the domain `AttemptRecord` so the store can serialize rows
/// without leaking storage concerns into the domain layer. Optional fields
/// persist as empty cells, distinguishable from `0`. Time of day is kept as
/// an `HH:MM` string, which is what the original files carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRow {
    pub date: NaiveDate,
    pub time: String,
    pub book: u32,
    pub test: u32,
    pub module: Module,
    pub part: Option<Part>,
    pub question_type: String,
    pub total_questions: u32,
    pub correct: u32,
    pub minutes: Option<f64>,
    pub avg_time_per_q: Option<f64>,
}

/// Canonical column set, in the order the original files use.
pub const COLUMNS: [&str; 11] = [
    "date",
    "time",
    "book",
    "test",
    "module",
    "part",
    "question_type",
    "total_questions",
    "correct",
    "minutes",
    "avg_time_per_q",
];

impl AttemptRow {
    #[must_use]
    pub fn from_record(record: &AttemptRecord) -> Self {
        Self {
            date: record.date(),
            time: record.time().format("%H:%M").to_string(),
            book: record.test().book,
            test: record.test().test,
            module: record.module(),
            part: record.part(),
            question_type: record.question_type().to_owned(),
            total_questions: record.total_questions(),
            correct: record.correct(),
            minutes: record.minutes(),
            avg_time_per_q: record.avg_time_per_q(),
        }
    }

    /// Convert the row back into a domain `AttemptRecord`.
    ///
    /// Rehydration does not re-validate record invariants; a hand-edited row
    /// with `correct > total_questions` loads fine and simply reports an
    /// accuracy above 100 %.
    ///
    /// # Errors
    ///
    /// Returns `RowError::Time` if the time-of-day cell cannot be parsed.
    pub fn into_record(self) -> Result<AttemptRecord, RowError> {
        let time = NaiveTime::parse_from_str(&self.time, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&self.time, "%H:%M:%S"))
            .map_err(|_| RowError::Time(self.time.clone()))?;

        Ok(AttemptRecord::from_persisted(
            self.date,
            time,
            TestRef::new(self.book, self.test),
            self.module,
            self.part,
            self.question_type,
            self.total_questions,
            self.correct,
            self.minutes,
            self.avg_time_per_q,
        ))
    }
}

/// Contract for the ordered attempt-record store.
///
/// The store is an ordered collection: `load` returns records in their
/// original insertion order, and every mutation reads and rewrites the whole
/// store. All operations are synchronous; the design assumes a single local
/// user and a single process.
pub trait RecordStore: Send + Sync {
    /// Read all persisted records in insertion order.
    ///
    /// An empty store is valid input and yields an empty vector.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the backing store cannot be
    /// read, or `StorageError::Malformed` for an unparseable row.
    fn load(&self) -> Result<Vec<AttemptRecord>, StorageError>;

    /// Append one record and persist the whole store.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read or rewritten.
    fn append(&self, record: &AttemptRecord) -> Result<(), StorageError>;

    /// Delete the record at the given position and persist the whole store.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::OutOfRange` if no record exists at `index`.
    fn delete_at(&self, index: usize) -> Result<(), StorageError>;
}

/// Simple in-memory store implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    records: Arc<Mutex<Vec<AttemptRecord>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryStore {
    fn load(&self) -> Result<Vec<AttemptRecord>, StorageError> {
        let guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(guard.clone())
    }

    fn append(&self, record: &AttemptRecord) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        guard.push(record.clone());
        Ok(())
    }

    fn delete_at(&self, index: usize) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        if index >= guard.len() {
            return Err(StorageError::OutOfRange {
                index,
                len: guard.len(),
            });
        }
        guard.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_record(book: u32, test: u32, correct: u32) -> AttemptRecord {
        AttemptRecord::from_persisted(
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            TestRef::new(book, test),
            Module::Listening,
            Some(Part::new(1).unwrap()),
            "Multiple choice".to_string(),
            10,
            correct,
            None,
            None,
        )
    }

    #[test]
    fn in_memory_store_preserves_insertion_order() {
        let store = InMemoryStore::new();
        store.append(&build_record(15, 1, 8)).unwrap();
        store.append(&build_record(16, 4, 6)).unwrap();

        let records = store.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].test(), TestRef::new(15, 1));
        assert_eq!(records[1].test(), TestRef::new(16, 4));
    }

    #[test]
    fn in_memory_delete_is_positional() {
        let store = InMemoryStore::new();
        store.append(&build_record(15, 1, 8)).unwrap();
        store.append(&build_record(16, 4, 6)).unwrap();

        store.delete_at(0).unwrap();
        let records = store.load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].test(), TestRef::new(16, 4));
    }

    #[test]
    fn in_memory_delete_out_of_range() {
        let store = InMemoryStore::new();
        store.append(&build_record(15, 1, 8)).unwrap();

        let err = store.delete_at(3).unwrap_err();
        assert!(matches!(err, StorageError::OutOfRange { index: 3, len: 1 }));
    }

    #[test]
    fn row_roundtrips_record_fields() {
        let record = AttemptRecord::from_persisted(
            NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
            NaiveTime::from_hms_opt(14, 10, 0).unwrap(),
            TestRef::new(16, 2),
            Module::Reading,
            None,
            "Matching headings".to_string(),
            13,
            10,
            Some(19.5),
            Some(1.5),
        );

        let row = AttemptRow::from_record(&record);
        assert_eq!(row.time, "14:10");
        assert_eq!(row.book, 16);
        assert!(row.part.is_none());

        let back = row.into_record().unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn row_accepts_times_with_seconds() {
        let record = build_record(15, 1, 8);
        let mut row = AttemptRow::from_record(&record);
        row.time = "09:00:00".to_string();
        let back = row.into_record().unwrap();
        assert_eq!(back.time(), NaiveTime::from_hms_opt(9, 0, 0).unwrap());
    }

    #[test]
    fn row_rejects_unparseable_time() {
        let record = build_record(15, 1, 8);
        let mut row = AttemptRow::from_record(&record);
        row.time = "around noon".to_string();
        let err = row.into_record().unwrap_err();
        assert!(matches!(err, RowError::Time(raw) if raw == "around noon"));
    }
}
