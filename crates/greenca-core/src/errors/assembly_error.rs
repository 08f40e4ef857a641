//! Record assembly errors.

use super::error_code::{self, GreencaErrorCode};

/// Errors raised while mapping collected values into an input record.
#[derive(Debug, thiserror::Error)]
pub enum AssemblyError {
    #[error("no value collected for field {display_name} (model identifier {model_identifier})")]
    MissingField {
        display_name: String,
        model_identifier: String,
    },
}

impl GreencaErrorCode for AssemblyError {
    fn error_code(&self) -> &'static str {
        error_code::ASSEMBLY_ERROR
    }
}
