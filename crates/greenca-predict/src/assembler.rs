//! Record Assembler: collected values → model-facing record.

use std::collections::HashMap;

use greenca_core::errors::AssemblyError;
use greenca_core::models::InputRecord;
use greenca_core::schema::FeatureSchema;
use tracing::debug;

/// Build an [`InputRecord`] from values keyed by display name.
///
/// Walks the schema in order, so the record's key order is the schema's
/// regardless of how `values` is ordered. Values are passed through
/// untouched: range enforcement belongs to the input boundary. Entries in
/// `values` that the schema does not name are ignored.
///
/// # Errors
/// `AssemblyError::MissingField` for the first schema field with no value.
pub fn assemble(
    values: &HashMap<String, f64>,
    schema: &FeatureSchema,
) -> Result<InputRecord, AssemblyError> {
    let mut record = InputRecord::with_capacity(schema.len());

    for def in schema {
        let value = values
            .get(&def.display_name)
            .copied()
            .ok_or_else(|| AssemblyError::MissingField {
                display_name: def.display_name.clone(),
                model_identifier: def.model_identifier.clone(),
            })?;
        record.push(def.model_identifier.as_str(), value);
    }

    if values.len() > record.len() {
        let ignored: Vec<&str> = values
            .keys()
            .filter(|k| schema.by_display_name(k).is_none())
            .map(String::as_str)
            .collect();
        debug!(?ignored, "values outside the schema were ignored");
    }

    Ok(record)
}
