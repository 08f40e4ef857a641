//! Error handling for greenca.
//! One error enum per concern, `thiserror` only, aggregated by `GreencaError`.

pub mod assembly_error;
pub mod config_error;
pub mod error_code;
pub mod input_error;
pub mod load_error;
pub mod predict_error;
pub mod schema_error;

pub use assembly_error::AssemblyError;
pub use config_error::ConfigError;
pub use error_code::GreencaErrorCode;
pub use input_error::InputError;
pub use load_error::LoadError;
pub use predict_error::PredictError;
pub use schema_error::SchemaError;

use error_code as codes;

/// Top-level error for a single prediction request or startup step.
/// Aggregates the per-concern errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum GreencaError {
    #[error("Model load error: {0}")]
    Load(#[from] LoadError),

    #[error("Record assembly error: {0}")]
    Assembly(#[from] AssemblyError),

    #[error("Prediction error: {0}")]
    Predict(#[from] PredictError),

    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    /// The model returned a scalar outside the two known classes.
    #[error("internal error: model returned class {value}, expected 0 or 1")]
    InvariantViolation { value: i64 },
}

impl GreencaError {
    /// Whether this failure must stop the process rather than just the
    /// current request.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Load(_) | Self::Config(_) | Self::Schema(_))
    }
}

impl GreencaErrorCode for GreencaError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Load(e) => e.error_code(),
            Self::Assembly(e) => e.error_code(),
            Self::Predict(e) => e.error_code(),
            Self::Schema(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Input(e) => e.error_code(),
            Self::InvariantViolation { .. } => codes::INVARIANT_VIOLATION,
        }
    }
}

/// Result alias used across the workspace.
pub type GreencaResult<T> = Result<T, GreencaError>;
