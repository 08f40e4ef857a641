//! Model artifact load errors. All of these are fatal for the process.

use super::error_code::{self, GreencaErrorCode};

/// Errors raised while loading the classifier artifact at startup.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("model artifact not found: {path}")]
    ArtifactNotFound { path: String },

    #[error("model artifact unreadable: {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("model artifact corrupt: {path}: {reason}")]
    Corrupt { path: String, reason: String },

    #[error("unsupported model format: {format}")]
    UnsupportedFormat { format: String },

    #[error(
        "schema does not match the features the model was trained with: {details}; \
         model expects [{}]",
        expected.join(", ")
    )]
    SchemaMismatch {
        details: String,
        expected: Vec<String>,
    },
}

impl GreencaErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::ArtifactNotFound { .. } => error_code::ARTIFACT_NOT_FOUND,
            Self::Corrupt { .. } => error_code::ARTIFACT_CORRUPT,
            Self::SchemaMismatch { .. } => error_code::SCHEMA_MISMATCH,
            Self::Unreadable { .. } | Self::UnsupportedFormat { .. } => error_code::LOAD_ERROR,
        }
    }
}
