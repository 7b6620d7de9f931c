#![forbid(unsafe_code)]

pub mod csv_store;
pub mod repository;

pub use csv_store::CsvStore;
pub use repository::{AttemptRow, InMemoryStore, RecordStore, RowError, StorageError};
