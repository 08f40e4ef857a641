//! Input collector configuration.

use serde::{Deserialize, Serialize};

/// What the input collector does with a value outside its field's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutOfRangePolicy {
    /// Refuse the value.
    #[default]
    Reject,
    /// Pull the value to the nearest bound.
    Clamp,
}

impl std::str::FromStr for OutOfRangePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "clamp" => Ok(Self::Clamp),
            other => Err(format!("unknown out-of-range policy '{other}', expected reject or clamp")),
        }
    }
}

/// Configuration for the input boundary.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InputConfig {
    /// Out-of-range handling. Default: reject.
    pub out_of_range: Option<OutOfRangePolicy>,
}

impl InputConfig {
    pub fn effective_out_of_range(&self) -> OutOfRangePolicy {
        self.out_of_range.unwrap_or_default()
    }
}
