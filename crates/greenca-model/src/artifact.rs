//! On-disk layout of the linear classifier artifact.
//!
//! Mirrors the fitted attributes of a scikit-learn `LogisticRegression`
//! (optionally preceded by a `StandardScaler`) exported as JSON:
//!
//! ```json
//! {
//!   "format_version": 1,
//!   "model_type": "logistic_regression",
//!   "feature_names_in": ["EP_0", "EP_1"],
//!   "coef": [0.8, -1.2],
//!   "intercept": 0.1,
//!   "classes": [0, 1],
//!   "scaler": { "mean": [0.3, 1.1], "scale": [0.2, 0.9] }
//! }
//! ```

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub const SUPPORTED_FORMAT_VERSION: u32 = 1;
pub const MODEL_TYPE_LOGISTIC: &str = "logistic_regression";

/// Standardization applied before the linear step: `(x - mean) / scale`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Fitted parameters of a binary linear classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearArtifact {
    pub format_version: u32,
    pub model_type: String,
    /// Column names the model was fit with, in fit order.
    pub feature_names_in: Vec<String>,
    pub coef: Vec<f64>,
    pub intercept: f64,
    /// `[negative_class, positive_class]`.
    pub classes: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaler: Option<Scaler>,
}

impl LinearArtifact {
    /// Check internal consistency. Returns the reason the artifact is corrupt.
    pub fn validate(&self) -> Result<(), String> {
        if self.format_version != SUPPORTED_FORMAT_VERSION {
            return Err(format!(
                "unsupported format_version {}, expected {SUPPORTED_FORMAT_VERSION}",
                self.format_version
            ));
        }
        if self.model_type != MODEL_TYPE_LOGISTIC {
            return Err(format!("unsupported model_type '{}'", self.model_type));
        }
        if self.feature_names_in.is_empty() {
            return Err("feature_names_in is empty".to_string());
        }
        let mut seen = HashSet::new();
        for name in &self.feature_names_in {
            if !seen.insert(name.as_str()) {
                return Err(format!("duplicate feature name '{name}'"));
            }
        }
        let n = self.feature_names_in.len();
        if self.coef.len() != n {
            return Err(format!("coef has {} entries for {n} features", self.coef.len()));
        }
        if self.coef.iter().any(|c| !c.is_finite()) || !self.intercept.is_finite() {
            return Err("non-finite coefficient or intercept".to_string());
        }
        if self.classes.len() != 2 {
            return Err(format!("expected 2 classes, found {}", self.classes.len()));
        }
        if let Some(scaler) = &self.scaler {
            if scaler.mean.len() != n || scaler.scale.len() != n {
                return Err(format!(
                    "scaler has {} means and {} scales for {n} features",
                    scaler.mean.len(),
                    scaler.scale.len()
                ));
            }
            if scaler.mean.iter().any(|m| !m.is_finite()) {
                return Err("non-finite scaler mean".to_string());
            }
            if scaler.scale.iter().any(|s| !s.is_finite() || *s == 0.0) {
                return Err("scaler scale must be finite and non-zero".to_string());
            }
        }
        Ok(())
    }
}
