use serde::{Deserialize, Serialize};

use crate::constants::{HIGH_ADVANTAGE_TEXT, LOW_ADVANTAGE_TEXT};
use crate::errors::GreencaError;

/// Two-valued classification target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparativeAdvantage {
    /// Class 0.
    Low,
    /// Class 1.
    High,
}

impl ComparativeAdvantage {
    pub fn class(self) -> i64 {
        match self {
            Self::Low => 0,
            Self::High => 1,
        }
    }

    pub fn display_text(self) -> &'static str {
        match self {
            Self::Low => LOW_ADVANTAGE_TEXT,
            Self::High => HIGH_ADVANTAGE_TEXT,
        }
    }
}

/// Only 0 and 1 are valid. Anything else is an invariant violation and is
/// never coerced to a label.
impl TryFrom<i64> for ComparativeAdvantage {
    type Error = GreencaError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Low),
            1 => Ok(Self::High),
            other => Err(GreencaError::InvariantViolation { value: other }),
        }
    }
}

impl std::fmt::Display for ComparativeAdvantage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_text())
    }
}
