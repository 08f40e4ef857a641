//! Model artifact configuration.

use serde::{Deserialize, Serialize};

/// Default artifact file name, resolved relative to the working directory.
pub const DEFAULT_ARTIFACT_PATH: &str = "greencalogistic_regression_model.json";

/// Artifact encodings the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFormat {
    /// Linear classifier parameters as JSON.
    Json,
    /// ONNX classifier graph (requires the `onnx` feature of greenca-model).
    Onnx,
}

impl ModelFormat {
    /// Guess the format from a file extension. Unknown extensions are JSON.
    pub fn from_path(path: &str) -> Self {
        if path.to_ascii_lowercase().ends_with(".onnx") {
            Self::Onnx
        } else {
            Self::Json
        }
    }
}

impl std::str::FromStr for ModelFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "onnx" => Ok(Self::Onnx),
            other => Err(format!("unknown model format '{other}', expected json or onnx")),
        }
    }
}

/// Configuration for the model handle.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ModelConfig {
    /// Path to the classifier artifact. Default: `greencalogistic_regression_model.json`.
    pub artifact_path: Option<String>,
    /// Artifact format. Default: inferred from the file extension.
    pub format: Option<ModelFormat>,
    /// Fail at startup when the schema identifiers differ from the
    /// artifact's feature names. Default: true.
    pub strict_feature_names: Option<bool>,
}

impl ModelConfig {
    pub fn effective_artifact_path(&self) -> &str {
        self.artifact_path.as_deref().unwrap_or(DEFAULT_ARTIFACT_PATH)
    }

    pub fn effective_format(&self) -> ModelFormat {
        self.format
            .unwrap_or_else(|| ModelFormat::from_path(self.effective_artifact_path()))
    }

    pub fn effective_strict_feature_names(&self) -> bool {
        self.strict_feature_names.unwrap_or(true)
    }
}
