//! Feature schema errors.

use super::error_code::{self, GreencaErrorCode};

/// Errors raised when a feature schema violates its invariants.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("duplicate model identifier: {0}")]
    DuplicateIdentifier(String),

    #[error("duplicate display name: {0}")]
    DuplicateDisplayName(String),

    #[error("invalid bounds for {display_name}: min {min} > max {max} or not finite")]
    InvalidBounds {
        display_name: String,
        min: f64,
        max: f64,
    },

    #[error("empty {field} in feature definition #{index}")]
    EmptyName { field: &'static str, index: usize },

    #[error("schema must define exactly {expected} features, found {actual}")]
    WrongFeatureCount { expected: usize, actual: usize },

    #[error("schema file {path} could not be parsed: {message}")]
    ParseError { path: String, message: String },
}

impl GreencaErrorCode for SchemaError {
    fn error_code(&self) -> &'static str {
        error_code::SCHEMA_ERROR
    }
}
