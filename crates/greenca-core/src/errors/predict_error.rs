//! Prediction errors. Recoverable per request.

use super::error_code::{self, GreencaErrorCode};

/// Errors raised by a model handle when asked to predict.
///
/// Mismatch variants carry both the record's keys and the handle's
/// expected keys so the caller can show what the model wants.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("record has {actual} features, model expects {expected}")]
    FeatureCountMismatch {
        expected: usize,
        actual: usize,
        expected_features: Vec<String>,
    },

    #[error(
        "record keys do not match model features (missing: [{}], unexpected: [{}])",
        missing.join(", "),
        unexpected.join(", ")
    )]
    FeatureNameMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
        expected_features: Vec<String>,
    },

    #[error("feature order mismatch at position {position}: model expects {expected}, record has {found}")]
    FeatureOrderMismatch {
        position: usize,
        expected: String,
        found: String,
        expected_features: Vec<String>,
    },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },
}

impl PredictError {
    /// The handle's expected feature names, when the failure is a key mismatch.
    pub fn expected_features(&self) -> Option<&[String]> {
        match self {
            Self::FeatureCountMismatch {
                expected_features, ..
            }
            | Self::FeatureNameMismatch {
                expected_features, ..
            }
            | Self::FeatureOrderMismatch {
                expected_features, ..
            } => Some(expected_features),
            Self::InferenceFailed { .. } => None,
        }
    }
}

impl GreencaErrorCode for PredictError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InferenceFailed { .. } => error_code::INFERENCE_FAILED,
            _ => error_code::FEATURE_MISMATCH,
        }
    }
}
