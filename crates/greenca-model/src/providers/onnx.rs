//! ONNX Runtime classifier provider.
//!
//! Loads a classifier graph via the `ort` crate (v2). The graph takes one
//! `[1, n]` float tensor and emits the predicted label as an int64 tensor
//! in its first output, which is the layout `skl2onnx` produces.

use std::path::Path;
use std::sync::Mutex;

use greenca_core::errors::{LoadError, PredictError};
use greenca_core::models::InputRecord;
use greenca_core::traits::IModelHandle;
use ort::session::Session;
use ort::value::Tensor;
use tracing::debug;

use crate::feature_check::check_record;

/// ONNX-backed classifier handle.
///
/// ONNX graphs do not carry column names, so the expected features are
/// supplied by the caller (normally the active schema's identifiers).
pub struct OnnxModel {
    /// `Session::run` takes `&mut self`, so the session sits behind a Mutex
    /// to satisfy the `&self` trait requirement.
    session: Mutex<Session>,
    expected_features: Vec<String>,
    name: String,
}

impl OnnxModel {
    /// Load an ONNX classifier from the given path.
    ///
    /// # Errors
    /// Returns `LoadError::ArtifactNotFound` when the file is absent and
    /// `LoadError::Corrupt` when the runtime rejects it.
    pub fn load(path: &Path, expected_features: Vec<String>) -> Result<Self, LoadError> {
        let display = path.display().to_string();
        if !path.exists() {
            return Err(LoadError::ArtifactNotFound { path: display });
        }

        let session = Session::builder()
            .map_err(|e| LoadError::Corrupt {
                path: display.clone(),
                reason: e.to_string(),
            })?
            .with_intra_threads(1)
            .map_err(|e| LoadError::Corrupt {
                path: display.clone(),
                reason: e.to_string(),
            })?
            .commit_from_file(path)
            .map_err(|e| LoadError::Corrupt {
                path: display.clone(),
                reason: e.to_string(),
            })?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("onnx-model")
            .to_string();

        debug!(model = %name, features = expected_features.len(), "ONNX model loaded");

        Ok(Self {
            session: Mutex::new(session),
            expected_features,
            name,
        })
    }
}

impl IModelHandle for OnnxModel {
    fn predict(&self, record: &InputRecord) -> Result<i64, PredictError> {
        check_record(&self.expected_features, record)?;

        let row: Vec<f32> = record.values().map(|v| v as f32).collect();
        let width = row.len() as i64;
        let input = Tensor::from_array((vec![1i64, width], row)).map_err(|e| {
            PredictError::InferenceFailed {
                reason: format!("tensor creation error: {e}"),
            }
        })?;

        let mut session = self.session.lock().map_err(|e| PredictError::InferenceFailed {
            reason: format!("session lock poisoned: {e}"),
        })?;

        let outputs = session
            .run(ort::inputs![input])
            .map_err(|e| PredictError::InferenceFailed {
                reason: e.to_string(),
            })?;

        let (_name, label) = outputs
            .iter()
            .next()
            .ok_or_else(|| PredictError::InferenceFailed {
                reason: "no output tensor".to_string(),
            })?;

        let (_shape, data) =
            label
                .try_extract_tensor::<i64>()
                .map_err(|e| PredictError::InferenceFailed {
                    reason: format!("label extraction failed: {e}"),
                })?;

        data.first().copied().ok_or_else(|| PredictError::InferenceFailed {
            reason: "empty label tensor".to_string(),
        })
    }

    fn expected_features(&self) -> &[String] {
        &self.expected_features
    }

    fn name(&self) -> &str {
        &self.name
    }
}
