//! Startup entry point: resolve the configured artifact into a handle.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use greenca_core::config::{ModelConfig, ModelFormat};
use greenca_core::errors::LoadError;
use greenca_core::schema::FeatureSchema;
use greenca_core::traits::IModelHandle;
use tracing::{info, info_span, warn};

use crate::providers::LinearModel;
use crate::verify::verify_schema;

/// Load the configured artifact once and verify it against `schema`.
///
/// With `strict_feature_names` (the default) a schema that disagrees with
/// the artifact's feature names is a load failure. Otherwise the mismatch
/// is logged and left for per-request diagnostics.
pub fn load_model(
    config: &ModelConfig,
    schema: &FeatureSchema,
) -> Result<Arc<dyn IModelHandle>, LoadError> {
    let path = config.effective_artifact_path();
    let span = info_span!(
        "greenca.load",
        artifact_path = %path,
        feature_count = schema.len()
    );
    let _guard = span.enter();
    let started = Instant::now();

    let handle: Arc<dyn IModelHandle> = match config.effective_format() {
        ModelFormat::Json => Arc::new(LinearModel::load(Path::new(path))?),
        ModelFormat::Onnx => load_onnx(Path::new(path), schema)?,
    };

    let verification = verify_schema(schema, handle.as_ref());
    if config.effective_strict_feature_names() {
        verification.into_result()?;
    } else if !verification.is_match() {
        warn!(
            details = %verification.summary(),
            expected = ?verification.expected,
            "schema identifiers differ from model features; predictions will fail until fixed"
        );
    }

    info!(
        model = handle.name(),
        feature_count = handle.expected_features().len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "model artifact loaded"
    );
    Ok(handle)
}

#[cfg(feature = "onnx")]
fn load_onnx(path: &Path, schema: &FeatureSchema) -> Result<Arc<dyn IModelHandle>, LoadError> {
    let expected = schema.identifiers().into_iter().map(str::to_string).collect();
    Ok(Arc::new(crate::providers::OnnxModel::load(path, expected)?))
}

#[cfg(not(feature = "onnx"))]
fn load_onnx(_path: &Path, _schema: &FeatureSchema) -> Result<Arc<dyn IModelHandle>, LoadError> {
    Err(LoadError::UnsupportedFormat {
        format: "onnx (built without the `onnx` feature)".to_string(),
    })
}
