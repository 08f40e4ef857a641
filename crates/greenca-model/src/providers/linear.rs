//! Linear (logistic regression) classifier loaded from a JSON artifact.

use std::path::Path;

use greenca_core::errors::{LoadError, PredictError};
use greenca_core::models::InputRecord;
use greenca_core::traits::IModelHandle;
use tracing::debug;

use crate::artifact::LinearArtifact;
use crate::feature_check::check_record;

/// Immutable logistic regression handle.
///
/// Prediction is `classes[1]` when `intercept + Σ coef_i · x_i > 0`,
/// `classes[0]` otherwise, with `x` standardized first when the artifact
/// carries a scaler.
#[derive(Debug, Clone)]
pub struct LinearModel {
    artifact: LinearArtifact,
    name: String,
}

impl LinearModel {
    /// Load and validate an artifact from disk.
    ///
    /// The file is read into memory and closed before this returns.
    ///
    /// # Errors
    /// `LoadError::ArtifactNotFound` when the file is absent,
    /// `LoadError::Corrupt` when it does not parse or fails validation.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let display = path.display().to_string();
        if !path.exists() {
            return Err(LoadError::ArtifactNotFound { path: display });
        }

        let bytes = std::fs::read(path).map_err(|e| LoadError::Unreadable {
            path: display.clone(),
            reason: e.to_string(),
        })?;
        let artifact: LinearArtifact =
            serde_json::from_slice(&bytes).map_err(|e| LoadError::Corrupt {
                path: display.clone(),
                reason: e.to_string(),
            })?;

        let name = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("linear-model")
            .to_string();

        Self::validated(artifact, &name, display)
    }

    /// Build a handle from in-memory parameters.
    ///
    /// # Errors
    /// `LoadError::Corrupt`, reported against `name`, when the parameters
    /// fail validation.
    pub fn from_artifact(artifact: LinearArtifact, name: &str) -> Result<Self, LoadError> {
        Self::validated(artifact, name, name.to_string())
    }

    fn validated(artifact: LinearArtifact, name: &str, origin: String) -> Result<Self, LoadError> {
        artifact
            .validate()
            .map_err(|reason| LoadError::Corrupt { path: origin, reason })?;
        debug!(
            model = %name,
            features = artifact.feature_names_in.len(),
            scaled = artifact.scaler.is_some(),
            "linear model loaded"
        );
        Ok(Self {
            artifact,
            name: name.to_string(),
        })
    }

    pub fn artifact(&self) -> &LinearArtifact {
        &self.artifact
    }

    /// Raw decision value `intercept + Σ coef_i · x_i` for a checked row.
    fn decision_function(&self, row: &[f64]) -> f64 {
        let a = &self.artifact;
        let dot: f64 = match &a.scaler {
            Some(scaler) => row
                .iter()
                .zip(&a.coef)
                .zip(scaler.mean.iter().zip(&scaler.scale))
                .map(|((x, c), (m, s))| c * (x - m) / s)
                .sum(),
            None => row.iter().zip(&a.coef).map(|(x, c)| c * x).sum(),
        };
        a.intercept + dot
    }
}

impl IModelHandle for LinearModel {
    fn predict(&self, record: &InputRecord) -> Result<i64, PredictError> {
        check_record(&self.artifact.feature_names_in, record)?;

        let z = self.decision_function(&record.to_row());
        if !z.is_finite() {
            return Err(PredictError::InferenceFailed {
                reason: format!("decision value is not finite: {z}"),
            });
        }
        let class = if z > 0.0 {
            self.artifact.classes[1]
        } else {
            self.artifact.classes[0]
        };
        debug!(model = %self.name, decision = z, class, "linear prediction");
        Ok(class)
    }

    fn expected_features(&self) -> &[String] {
        &self.artifact.feature_names_in
    }

    fn name(&self) -> &str {
        &self.name
    }
}
