//! Input boundary errors: raw user input that cannot enter the core.

use super::error_code::{self, GreencaErrorCode};

/// Errors raised by the input collector before a value reaches the core.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("unknown field: {name}")]
    UnknownField { name: String },

    #[error("value for {name} is not a number: {raw}")]
    NotANumber { name: String, raw: String },

    #[error("value {value} for {name} is outside [{min}, {max}]")]
    OutOfRange {
        name: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("malformed assignment {raw:?}, expected NAME=VALUE")]
    MalformedAssignment { raw: String },

    #[error("{name} is given more than once (as {})", aliases.join(", "))]
    DuplicateField { name: String, aliases: Vec<String> },

    #[error("values file {path} could not be read: {message}")]
    ValuesFile { path: String, message: String },

    #[error("input ended before a value for {name} was provided")]
    EndOfInput { name: String },

    #[error("prompt I/O failed: {message}")]
    Io { message: String },
}

impl GreencaErrorCode for InputError {
    fn error_code(&self) -> &'static str {
        error_code::INPUT_ERROR
    }
}
