//! Record builders shared by the unit tests.

use chrono::{NaiveDate, NaiveTime};

use tracker_core::model::{AttemptRecord, Module, Part, TestRef};

pub(crate) fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 2).unwrap()
}

pub(crate) fn hm(raw: &str) -> NaiveTime {
    NaiveTime::parse_from_str(raw, "%H:%M").unwrap()
}

pub(crate) fn listening(
    book: u32,
    test: u32,
    part: u8,
    question_type: &str,
    correct: u32,
    total: u32,
    time: &str,
) -> AttemptRecord {
    AttemptRecord::from_persisted(
        sample_date(),
        hm(time),
        TestRef::new(book, test),
        Module::Listening,
        Some(Part::new(part).unwrap()),
        question_type.to_string(),
        total,
        correct,
        None,
        None,
    )
}

pub(crate) fn reading(
    book: u32,
    test: u32,
    question_type: &str,
    correct: u32,
    total: u32,
    minutes: Option<f64>,
    time: &str,
) -> AttemptRecord {
    let avg = minutes.and_then(|m| (total > 0).then(|| m / f64::from(total)));
    AttemptRecord::from_persisted(
        sample_date(),
        hm(time),
        TestRef::new(book, test),
        Module::Reading,
        None,
        question_type.to_string(),
        total,
        correct,
        minutes,
        avg,
    )
}
