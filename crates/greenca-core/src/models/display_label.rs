use serde::{Deserialize, Serialize};

use super::ComparativeAdvantage;
use crate::errors::{GreencaError, GreencaErrorCode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
}

/// Text handed to the UI for rendering, with how it should be styled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayLabel {
    pub text: String,
    pub severity: Severity,
    /// Error code for failures, `None` for predictions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl DisplayLabel {
    pub fn prediction(advantage: ComparativeAdvantage) -> Self {
        Self {
            text: advantage.display_text().to_string(),
            severity: Severity::Success,
            code: None,
        }
    }

    pub fn failure(error: &GreencaError, text: String) -> Self {
        Self {
            text,
            severity: Severity::Error,
            code: Some(error.error_code().to_string()),
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for DisplayLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
