use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur when parsing a module name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseModuleError {
    #[error("unknown module: {0:?}")]
    Unknown(String),
}

//
// ─── MODULE ───────────────────────────────────────────────────────────────────
//

/// The two exam sections tracked by this system.
///
/// Each module has its own question-type vocabulary and timing rules:
/// - `Listening` attempts carry a part number (1-4), never a minutes value
/// - `Reading` attempts may carry a minutes value, never a part number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Module {
    Listening,
    Reading,
}

impl Module {
    /// All modules, in presentation order.
    pub const ALL: [Module; 2] = [Module::Listening, Module::Reading];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Module::Listening => "Listening",
            Module::Reading => "Reading",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Module {
    type Err = ParseModuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("listening") {
            Ok(Module::Listening)
        } else if s.eq_ignore_ascii_case("reading") {
            Ok(Module::Reading)
        } else {
            Err(ParseModuleError::Unknown(s.to_string()))
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
