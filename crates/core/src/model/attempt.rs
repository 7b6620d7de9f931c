use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::band::accuracy;
use crate::config::question_types;
use crate::model::{Module, Part, TestRef};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur while validating an attempt draft.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum AttemptError {
    #[error("correct answers ({correct}) cannot exceed total questions ({total})")]
    CorrectExceedsTotal { correct: u32, total: u32 },

    #[error("total questions must be positive")]
    ZeroTotal,

    #[error("Listening attempts require a part number")]
    MissingPart,

    #[error("part numbers only apply to Listening attempts")]
    UnexpectedPart,

    #[error("minutes must be positive for Reading, got {provided}")]
    NonPositiveMinutes { provided: f64 },

    #[error("unknown {module} question type: {provided:?}")]
    UnknownQuestionType { module: Module, provided: String },
}

//
// ─── ATTEMPT RECORD ───────────────────────────────────────────────────────────
//

/// One practice session's result for one question-type slice.
///
/// Records are immutable once created: they are appended to the store and
/// only ever removed by position, never updated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptRecord {
    date: NaiveDate,
    time: NaiveTime,
    test: TestRef,
    module: Module,
    part: Option<Part>,
    question_type: String,
    total_questions: u32,
    correct: u32,
    minutes: Option<f64>,
    avg_time_per_q: Option<f64>,
}

/// Unvalidated input for a new attempt, as collected by an entry form.
///
/// `validate` stamps the record with the supplied date/time and enforces the
/// record invariants (correct ≤ total, part iff Listening, positive minutes
/// for Reading, question type drawn from the module vocabulary).
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptDraft {
    pub test: TestRef,
    pub module: Module,
    pub part: Option<Part>,
    pub question_type: String,
    pub total_questions: u32,
    pub correct: u32,
    pub minutes: Option<f64>,
}

impl AttemptDraft {
    /// Validate the draft into an immutable record stamped with `date`/`time`.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError` when any record invariant is violated.
    pub fn validate(self, date: NaiveDate, time: NaiveTime) -> Result<AttemptRecord, AttemptError> {
        if self.total_questions == 0 {
            return Err(AttemptError::ZeroTotal);
        }
        if self.correct > self.total_questions {
            return Err(AttemptError::CorrectExceedsTotal {
                correct: self.correct,
                total: self.total_questions,
            });
        }
        match self.module {
            Module::Listening if self.part.is_none() => return Err(AttemptError::MissingPart),
            Module::Reading if self.part.is_some() => return Err(AttemptError::UnexpectedPart),
            _ => {}
        }
        if !question_types(self.module)
            .iter()
            .any(|known| *known == self.question_type)
        {
            return Err(AttemptError::UnknownQuestionType {
                module: self.module,
                provided: self.question_type,
            });
        }

        // Minutes only apply to Reading; when present they must be positive
        // and yield the derived per-question average.
        let minutes = match (self.module, self.minutes) {
            (Module::Reading, Some(m)) if m <= 0.0 => {
                return Err(AttemptError::NonPositiveMinutes { provided: m });
            }
            (Module::Reading, m) => m,
            (Module::Listening, _) => None,
        };
        let avg_time_per_q = minutes.map(|m| m / f64::from(self.total_questions));

        Ok(AttemptRecord {
            date,
            time,
            test: self.test,
            module: self.module,
            part: self.part,
            question_type: self.question_type,
            total_questions: self.total_questions,
            correct: self.correct,
            minutes,
            avg_time_per_q,
        })
    }
}

impl AttemptRecord {
    /// Rehydrate a record from persisted storage without re-validation.
    ///
    /// Stored rows are trusted as-is so the system stays well-defined on
    /// hand-edited files; an invariant-violating row yields an accuracy over
    /// 100 %, not a panic.
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn from_persisted(
        date: NaiveDate,
        time: NaiveTime,
        test: TestRef,
        module: Module,
        part: Option<Part>,
        question_type: String,
        total_questions: u32,
        correct: u32,
        minutes: Option<f64>,
        avg_time_per_q: Option<f64>,
    ) -> Self {
        Self {
            date,
            time,
            test,
            module,
            part,
            question_type,
            total_questions,
            correct,
            minutes,
            avg_time_per_q,
        }
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn time(&self) -> NaiveTime {
        self.time
    }

    #[must_use]
    pub fn test(&self) -> TestRef {
        self.test
    }

    #[must_use]
    pub fn module(&self) -> Module {
        self.module
    }

    #[must_use]
    pub fn part(&self) -> Option<Part> {
        self.part
    }

    #[must_use]
    pub fn question_type(&self) -> &str {
        &self.question_type
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn correct(&self) -> u32 {
        self.correct
    }

    #[must_use]
    pub fn minutes(&self) -> Option<f64> {
        self.minutes
    }

    #[must_use]
    pub fn avg_time_per_q(&self) -> Option<f64> {
        self.avg_time_per_q
    }

    /// Percentage of questions answered correctly (0.0 when total is 0).
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        accuracy(self.correct, self.total_questions)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
