use std::path::PathBuf;

use crate::model::Module;

/// Listening question types, as presented by the entry form.
pub const LISTENING_TYPES: [&str; 11] = [
    "Multiple choice",
    "Matching (move into the gaps)",
    "Plan/map/diagram labelling",
    "Form completion",
    "Note completion",
    "Table completion",
    "Flow-chart completion",
    "Summary completion",
    "Sentence completion",
    "Short-answer questions",
    "Two-facts",
];

/// Reading question types.
pub const READING_TYPES: [&str; 16] = [
    "Multiple choice",
    "T/F/NG (Identifying information)",
    "Y/N/NG (Identifying writer’s views)",
    "Matching information",
    "Matching headings",
    "Matching features",
    "Matching sentence endings",
    "Sentence completion",
    "Summary completion",
    "Note completion",
    "Table completion",
    "Flow-chart completion",
    "Diagram label completion",
    "Letterbox completion",
    "Short-answer questions",
    "Two-facts",
];

/// The closed question-type vocabulary for a module.
#[must_use]
pub fn question_types(module: Module) -> &'static [&'static str] {
    match module {
        Module::Listening => &LISTENING_TYPES,
        Module::Reading => &READING_TYPES,
    }
}

/// Process-wide tracker configuration, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    pub csv_path: PathBuf,
}

impl TrackerConfig {
    /// Configuration pointing at a specific store file.
    #[must_use]
    pub fn with_csv_path(csv_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
        }
    }
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("ielts_progress.csv"),
        }
    }
}
