use std::fs::File;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use tracker_core::config::TrackerConfig;
use tracker_core::model::AttemptRecord;

use crate::repository::{AttemptRow, COLUMNS, RecordStore, StorageError};

/// CSV-backed record store.
///
/// The backing file is the whole store: `load` reads it in full, and every
/// mutation rewrites it in full. A missing file is initialized with the
/// canonical header row on first use.
#[derive(Debug, Clone)]
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn from_config(config: &TrackerConfig) -> Self {
        Self::new(config.csv_path.clone())
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_init(&self) -> Result<(), StorageError> {
        if self.path.exists() {
            return Ok(());
        }
        debug!(path = %self.path.display(), "initializing empty record store");
        self.rewrite(&[])
    }

    fn rewrite(&self, records: &[AttemptRecord]) -> Result<(), StorageError> {
        let file = File::create(&self.path).map_err(|e| StorageError::Io(e.to_string()))?;
        // Header is written explicitly so an empty store still carries the
        // canonical column set.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer
            .write_record(COLUMNS)
            .map_err(|e| StorageError::Io(e.to_string()))?;
        for record in records {
            writer
                .serialize(AttemptRow::from_record(record))
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }
        writer.flush().map_err(|e| StorageError::Io(e.to_string()))
    }
}

impl RecordStore for CsvStore {
    fn load(&self) -> Result<Vec<AttemptRecord>, StorageError> {
        self.ensure_init()?;
        let file = File::open(&self.path)
            .map_err(|e| StorageError::Unavailable(format!("{}: {e}", self.path.display())))?;
        let mut reader = csv::Reader::from_reader(file);

        let mut records = Vec::new();
        for (idx, row) in reader.deserialize::<AttemptRow>().enumerate() {
            let row = row.map_err(|e| StorageError::Malformed {
                row: idx + 1,
                reason: e.to_string(),
            })?;
            let record = row.into_record().map_err(|e| StorageError::Malformed {
                row: idx + 1,
                reason: e.to_string(),
            })?;
            records.push(record);
        }
        debug!(count = records.len(), "loaded attempt records");
        Ok(records)
    }

    fn append(&self, record: &AttemptRecord) -> Result<(), StorageError> {
        let mut records = self.load()?;
        records.push(record.clone());
        self.rewrite(&records)?;
        info!(test = %record.test(), module = %record.module(), "appended attempt record");
        Ok(())
    }

    fn delete_at(&self, index: usize) -> Result<(), StorageError> {
        let mut records = self.load()?;
        if index >= records.len() {
            return Err(StorageError::OutOfRange {
                index,
                len: records.len(),
            });
        }
        records.remove(index);
        self.rewrite(&records)?;
        info!(index, "deleted attempt record");
        Ok(())
    }
}
