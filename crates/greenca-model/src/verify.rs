//! Schema-vs-artifact verification.
//!
//! The schema's identifiers are configuration; the artifact is the ground
//! truth for which names the model was fit with and in what order. This
//! compares the two once at startup instead of failing on every request.

use std::collections::HashSet;

use greenca_core::errors::LoadError;
use greenca_core::schema::FeatureSchema;
use greenca_core::traits::IModelHandle;
use serde::Serialize;

/// Outcome of comparing a schema against a model's expected features.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaVerification {
    /// Model features the schema does not produce.
    pub missing: Vec<String>,
    /// Schema identifiers the model does not know.
    pub unexpected: Vec<String>,
    /// First position where both name sets agree but the order differs.
    pub first_order_mismatch: Option<usize>,
    /// The model's expected features, in order.
    pub expected: Vec<String>,
}

impl SchemaVerification {
    pub fn is_match(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty() && self.first_order_mismatch.is_none()
    }

    /// One-line summary of what differs.
    pub fn summary(&self) -> String {
        if self.is_match() {
            return "schema matches model features".to_string();
        }
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!("missing [{}]", self.missing.join(", ")));
        }
        if !self.unexpected.is_empty() {
            parts.push(format!("unexpected [{}]", self.unexpected.join(", ")));
        }
        if let Some(pos) = self.first_order_mismatch {
            parts.push(format!("order differs from position {pos}"));
        }
        parts.join("; ")
    }

    /// Convert a mismatch into the startup error.
    pub fn into_result(self) -> Result<(), LoadError> {
        if self.is_match() {
            Ok(())
        } else {
            Err(LoadError::SchemaMismatch {
                details: self.summary(),
                expected: self.expected,
            })
        }
    }
}

/// Compare `schema` identifiers with `handle.expected_features()`.
pub fn verify_schema(schema: &FeatureSchema, handle: &dyn IModelHandle) -> SchemaVerification {
    let expected = handle.expected_features();
    let identifiers = schema.identifiers();

    let expected_set: HashSet<&str> = expected.iter().map(String::as_str).collect();
    let schema_set: HashSet<&str> = identifiers.iter().copied().collect();

    let missing = expected
        .iter()
        .filter(|name| !schema_set.contains(name.as_str()))
        .cloned()
        .collect::<Vec<_>>();
    let unexpected = identifiers
        .iter()
        .filter(|id| !expected_set.contains(**id))
        .map(|id| id.to_string())
        .collect::<Vec<_>>();

    let first_order_mismatch = if missing.is_empty() && unexpected.is_empty() {
        expected
            .iter()
            .zip(&identifiers)
            .position(|(want, got)| want.as_str() != *got)
    } else {
        None
    };

    SchemaVerification {
        missing,
        unexpected,
        first_order_mismatch,
        expected: expected.to_vec(),
    }
}
