//! GreencaErrorCode trait for user-facing diagnostics.

/// Every error enum implements this to provide a stable, machine-matchable
/// code alongside its human-readable message.
pub trait GreencaErrorCode {
    /// Returns the error code string (e.g., "LOAD_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted diagnostic string: `[ERROR_CODE] message`.
    fn display_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const LOAD_ERROR: &str = "LOAD_ERROR";
pub const ARTIFACT_NOT_FOUND: &str = "ARTIFACT_NOT_FOUND";
pub const ARTIFACT_CORRUPT: &str = "ARTIFACT_CORRUPT";
pub const SCHEMA_MISMATCH: &str = "SCHEMA_MISMATCH";
pub const ASSEMBLY_ERROR: &str = "ASSEMBLY_ERROR";
pub const FEATURE_MISMATCH: &str = "FEATURE_MISMATCH";
pub const INFERENCE_FAILED: &str = "INFERENCE_FAILED";
pub const INVARIANT_VIOLATION: &str = "INVARIANT_VIOLATION";
pub const SCHEMA_ERROR: &str = "SCHEMA_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INPUT_ERROR: &str = "INPUT_ERROR";
