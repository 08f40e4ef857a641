//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Default filter when neither `GREENCA_LOG` nor `log_level` is set.
pub const DEFAULT_LOG_FILTER: &str = "greenca=info";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Filter directive, e.g. "info" or "greenca_model=debug". Default: `greenca=info`.
    pub log_level: Option<String>,
    /// Emit JSON log lines instead of human-readable ones. Default: false.
    pub json: Option<bool>,
}

impl ObservabilityConfig {
    pub fn effective_log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn effective_json(&self) -> bool {
        self.json.unwrap_or(false)
    }
}
