//! `greenca verify`: compare the schema with the artifact's feature names.

use std::io::Write;

use greenca_core::config::ModelConfig;
use greenca_core::errors::GreencaError;
use greenca_core::schema::FeatureSchema;
use greenca_model::{load_model, verify_schema};

use super::{EXIT_OK, EXIT_REQUEST_FAILED};

/// Loads the artifact without the strict startup check so the mismatch can
/// be shown in full rather than as a load failure.
pub fn execute<W: Write>(
    model: &ModelConfig,
    schema: &FeatureSchema,
    out: &mut W,
) -> anyhow::Result<u8> {
    let lenient = ModelConfig {
        strict_feature_names: Some(false),
        ..model.clone()
    };
    let handle = load_model(&lenient, schema).map_err(GreencaError::from)?;
    let verification = verify_schema(schema, handle.as_ref());

    writeln!(out, "model: {} ({})", handle.name(), model.effective_artifact_path())?;
    writeln!(out, "{}", verification.summary())?;
    if verification.is_match() {
        return Ok(EXIT_OK);
    }

    writeln!(out, "model expects, in order:")?;
    let identifiers = schema.identifiers();
    for (i, name) in verification.expected.iter().enumerate() {
        let current = identifiers.get(i).copied().unwrap_or("-");
        let marker = if current == name { " " } else { "*" };
        writeln!(out, "{marker} {:>2}  {:<12} schema: {current}", i + 1, name)?;
    }
    Ok(EXIT_REQUEST_FAILED)
}
