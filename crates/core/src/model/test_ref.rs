use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── TEST REFERENCE ───────────────────────────────────────────────────────────
//

/// Identifies one practice-test instance: a book number plus the test number
/// within that book (e.g. Cambridge book 15, test 1 is "15-1").
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TestRef {
    pub book: u32,
    pub test: u32,
}

impl TestRef {
    #[must_use]
    pub fn new(book: u32, test: u32) -> Self {
        Self { book, test }
    }

    /// Composite ordering key: `book * 10 + test`.
    ///
    /// Book-test pairs must sort numerically, not lexically; with string
    /// comparison "9-1" would sort after "16-4". Every place that orders
    /// book-test pairs must use this key.
    #[must_use]
    pub fn sort_key(self) -> u32 {
        self.book * 10 + self.test
    }
}

impl fmt::Debug for TestRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TestRef({}-{})", self.book, self.test)
    }
}

impl fmt::Display for TestRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.book, self.test)
    }
}

/// Error type for parsing a book-test pair from a "book-test" string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid book-test pair: {raw:?}")]
pub struct ParseTestRefError {
    raw: String,
}

impl FromStr for TestRef {
    type Err = ParseTestRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTestRefError { raw: s.to_string() };
        let (book, test) = s.split_once('-').ok_or_else(err)?;
        let book = book.trim().parse::<u32>().map_err(|_| err())?;
        let test = test.trim().parse::<u32>().map_err(|_| err())?;
        Ok(Self { book, test })
    }
}

//
// ─── PART ─────────────────────────────────────────────────────────────────────
//

/// Errors that can occur when constructing a listening part number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PartError {
    #[error("part must be between 1 and 4, got {0}")]
    OutOfRange(u8),

    #[error("invalid part number: {0:?}")]
    Invalid(String),
}

/// Listening-only subdivision (1-4) of a test.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Part(u8);

impl Part {
    /// Creates a part number, validating the 1-4 range.
    ///
    /// # Errors
    ///
    /// Returns `PartError::OutOfRange` if the value is not in 1-4.
    pub fn new(value: u8) -> Result<Self, PartError> {
        if (1..=4).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PartError::OutOfRange(value))
        }
    }

    /// Returns the underlying part number.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Part {
    type Error = PartError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Part> for u8 {
    fn from(part: Part) -> Self {
        part.0
    }
}

impl fmt::Debug for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Part({})", self.0)
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Part {
    type Err = PartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| PartError::Invalid(s.to_string()))?;
        Self::new(value)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ref_display_and_parse_roundtrip() {
        let original = TestRef::new(15, 1);
        assert_eq!(original.to_string(), "15-1");
        let parsed: TestRef = "15-1".parse().unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_ref_parse_rejects_garbage() {
        assert!("15".parse::<TestRef>().is_err());
        assert!("a-b".parse::<TestRef>().is_err());
        assert!("".parse::<TestRef>().is_err());
    }

    #[test]
    fn sort_key_orders_numerically_not_lexically() {
        // "16-4" > "15-1" even though lexical string order agrees here
        assert!(TestRef::new(15, 1).sort_key() < TestRef::new(16, 4).sort_key());
        // "9-9" < "10-1"; lexical order would put "9-9" last
        assert!(TestRef::new(9, 9).sort_key() < TestRef::new(10, 1).sort_key());
    }

    #[test]
    fn sort_key_is_composite() {
        assert_eq!(TestRef::new(15, 1).sort_key(), 151);
        assert_eq!(TestRef::new(16, 4).sort_key(), 164);
    }

    #[test]
    fn part_validates_range() {
        assert_eq!(Part::new(1).unwrap().value(), 1);
        assert_eq!(Part::new(4).unwrap().value(), 4);
        assert!(matches!(Part::new(0), Err(PartError::OutOfRange(0))));
        assert!(matches!(Part::new(5), Err(PartError::OutOfRange(5))));
    }

    #[test]
    fn part_from_str() {
        let part: Part = "3".parse().unwrap();
        assert_eq!(part.value(), 3);
        assert!("five".parse::<Part>().is_err());
    }
}
