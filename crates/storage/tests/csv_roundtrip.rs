use std::fs;

use chrono::{NaiveDate, NaiveTime};
use tempfile::tempdir;

use storage::{CsvStore, RecordStore, StorageError};
use tracker_core::model::{AttemptRecord, Module, Part, TestRef};

fn listening_record(book: u32, test: u32, part: u8, correct: u32) -> AttemptRecord {
    AttemptRecord::from_persisted(
        NaiveDate::from_ymd_opt(2024, 3, 2).unwrap(),
        NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        TestRef::new(book, test),
        Module::Listening,
        Some(Part::new(part).unwrap()),
        "Multiple choice".to_string(),
        10,
        correct,
        None,
        None,
    )
}

fn reading_record(book: u32, test: u32, minutes: Option<f64>) -> AttemptRecord {
    let avg = minutes.map(|m| m / 13.0);
    AttemptRecord::from_persisted(
        NaiveDate::from_ymd_opt(2024, 3, 3).unwrap(),
        NaiveTime::from_hms_opt(14, 10, 0).unwrap(),
        TestRef::new(book, test),
        Module::Reading,
        None,
        "Matching headings".to_string(),
        13,
        10,
        minutes,
        avg,
    )
}

#[test]
fn load_initializes_missing_store_with_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("progress.csv");
    let store = CsvStore::new(&path);

    let records = store.load().expect("empty store is valid");
    assert!(records.is_empty());

    let contents = fs::read_to_string(&path).unwrap();
    let header = contents.lines().next().unwrap();
    assert_eq!(
        header,
        "date,time,book,test,module,part,question_type,total_questions,correct,minutes,avg_time_per_q"
    );
}

#[test]
fn append_and_load_roundtrip() {
    let dir = tempdir().unwrap();
    let store = CsvStore::new(dir.path().join("progress.csv"));

    let listening = listening_record(15, 1, 1, 8);
    let timed = reading_record(16, 2, Some(19.5));
    let untimed = reading_record(16, 3, None);

    store.append(&listening).unwrap();
    store.append(&timed).unwrap();
    store.append(&untimed).unwrap();

    let records = store.load().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0], listening);
    assert_eq!(records[1], timed);
    assert_eq!(records[2], untimed);

    // Absent optional fields persist as empty cells, not zeros.
    assert!(records[2].minutes().is_none());
    assert!(records[2].avg_time_per_q().is_none());
}

#[test]
fn optional_fields_serialize_as_empty_cells() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("progress.csv");
    let store = CsvStore::new(&path);

    store.append(&reading_record(16, 3, None)).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let data_line = contents.lines().nth(1).unwrap();
    assert!(
        data_line.ends_with(",,"),
        "expected empty minutes/avg cells, got {data_line:?}"
    );
}

#[test]
fn delete_at_removes_by_position() {
    let dir = tempdir().unwrap();
    let store = CsvStore::new(dir.path().join("progress.csv"));

    store.append(&listening_record(15, 1, 1, 8)).unwrap();
    store.append(&listening_record(15, 1, 2, 6)).unwrap();
    store.append(&listening_record(16, 4, 1, 7)).unwrap();

    store.delete_at(1).unwrap();

    let records = store.load().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].part().unwrap().value(), 1);
    assert_eq!(records[1].test(), TestRef::new(16, 4));
}

#[test]
fn delete_at_out_of_range_is_an_error() {
    let dir = tempdir().unwrap();
    let store = CsvStore::new(dir.path().join("progress.csv"));
    store.append(&listening_record(15, 1, 1, 8)).unwrap();

    let err = store.delete_at(5).unwrap_err();
    assert!(matches!(err, StorageError::OutOfRange { index: 5, len: 1 }));
}

#[test]
fn malformed_row_is_reported_with_position() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("progress.csv");
    fs::write(
        &path,
        "date,time,book,test,module,part,question_type,total_questions,correct,minutes,avg_time_per_q\n\
         2024-03-02,morning,15,1,Listening,1,Multiple choice,10,8,,\n",
    )
    .unwrap();

    let store = CsvStore::new(&path);
    let err = store.load().unwrap_err();
    assert!(matches!(err, StorageError::Malformed { row: 1, .. }));
}

#[test]
fn reordered_columns_still_load() {
    // The reader is header-driven, so a hand-reordered file round-trips.
    let dir = tempdir().unwrap();
    let path = dir.path().join("progress.csv");
    fs::write(
        &path,
        "module,book,test,date,time,part,question_type,total_questions,correct,minutes,avg_time_per_q\n\
         Reading,16,2,2024-03-03,14:10,,Matching headings,13,10,19.5,1.5\n",
    )
    .unwrap();

    let store = CsvStore::new(&path);
    let records = store.load().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].module(), Module::Reading);
    assert_eq!(records[0].minutes(), Some(19.5));
}

#[test]
fn invariant_violating_row_loads_without_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("progress.csv");
    fs::write(
        &path,
        "date,time,book,test,module,part,question_type,total_questions,correct,minutes,avg_time_per_q\n\
         2024-03-03,14:10,16,2,Reading,,Multiple choice,20,23,,\n",
    )
    .unwrap();

    let store = CsvStore::new(&path);
    let records = store.load().unwrap();
    assert_eq!(records.len(), 1);
    assert!((records[0].accuracy() - 115.0).abs() < 1e-9);
}
