use serde::{Deserialize, Serialize};
use std::fmt;

/// A contiguous sequence of decimal digits extracted for one coordinate
/// instance, with no embedded field separators. Placeholder characters are
/// stripped by the grid reader before a run is constructed, so a well-formed
/// run contains only '0'-'9'. An empty run stands in for a missing or
/// malformed grid entry and fails at decode time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DigitRun(String);

impl DigitRun {
    pub fn new(digits: impl Into<String>) -> Self {
        Self(digits.into())
    }

    /// Placeholder run for a missing or malformed grid entry.
    pub fn empty() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True if every character is an ASCII decimal digit. Empty runs are
    /// trivially well-formed; they fail decoding for emptiness instead.
    pub fn is_well_formed(&self) -> bool {
        self.0.chars().all(|c| c.is_ascii_digit())
    }
}

impl From<&str> for DigitRun {
    fn from(digits: &str) -> Self {
        Self(digits.to_string())
    }
}

impl fmt::Display for DigitRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}
