//! Ordered, validated feature schema.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{catalog, FeatureDefinition};
use crate::constants::FEATURE_COUNT;
use crate::errors::SchemaError;

/// Immutable ordered sequence of feature definitions.
///
/// Construction validates the invariants every later stage relies on:
/// unique identifiers, unique display names, finite `min <= max` bounds.
/// The order is the order records are handed to the model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureSchema {
    features: Vec<FeatureDefinition>,
}

/// On-disk schema layout: a list of `[[feature]]` tables.
#[derive(Debug, Deserialize)]
struct SchemaFile {
    #[serde(rename = "feature", default)]
    features: Vec<FeatureDefinition>,
}

impl FeatureSchema {
    /// Build a schema from definitions, validating its invariants.
    pub fn new(features: Vec<FeatureDefinition>) -> Result<Self, SchemaError> {
        let mut identifiers = HashSet::with_capacity(features.len());
        let mut display_names = HashSet::with_capacity(features.len());

        for (index, def) in features.iter().enumerate() {
            if def.display_name.trim().is_empty() {
                return Err(SchemaError::EmptyName {
                    field: "display_name",
                    index,
                });
            }
            if def.model_identifier.trim().is_empty() {
                return Err(SchemaError::EmptyName {
                    field: "model_identifier",
                    index,
                });
            }
            if !def.min.is_finite() || !def.max.is_finite() || def.min > def.max {
                return Err(SchemaError::InvalidBounds {
                    display_name: def.display_name.clone(),
                    min: def.min,
                    max: def.max,
                });
            }
            if !identifiers.insert(def.model_identifier.as_str()) {
                return Err(SchemaError::DuplicateIdentifier(def.model_identifier.clone()));
            }
            if !display_names.insert(def.display_name.as_str()) {
                return Err(SchemaError::DuplicateDisplayName(def.display_name.clone()));
            }
        }

        Ok(Self { features })
    }

    /// The built-in 21-indicator schema.
    pub fn builtin() -> Self {
        // The catalog is a compile-time constant covered by tests.
        Self {
            features: catalog::definitions(),
        }
    }

    /// Parse a schema from TOML `[[feature]]` tables.
    ///
    /// A schema file replaces the built-in catalog, so it must define
    /// exactly as many features as the classifier consumes.
    pub fn from_toml(toml_str: &str) -> Result<Self, SchemaError> {
        Self::parse(toml_str, "<string>")
    }

    /// Load a schema from a TOML file.
    pub fn load(path: &Path) -> Result<Self, SchemaError> {
        let content = std::fs::read_to_string(path).map_err(|e| SchemaError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    fn parse(toml_str: &str, origin: &str) -> Result<Self, SchemaError> {
        let file: SchemaFile = toml::from_str(toml_str).map_err(|e| SchemaError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        if file.features.len() != FEATURE_COUNT {
            return Err(SchemaError::WrongFeatureCount {
                expected: FEATURE_COUNT,
                actual: file.features.len(),
            });
        }
        Self::new(file.features)
    }

    /// Serialize to the same `[[feature]]` layout `from_toml` reads.
    pub fn to_toml(&self) -> Result<String, SchemaError> {
        #[derive(Serialize)]
        struct Out<'a> {
            feature: &'a [FeatureDefinition],
        }
        toml::to_string_pretty(&Out {
            feature: &self.features,
        })
        .map_err(|e| SchemaError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FeatureDefinition> {
        self.features.iter()
    }

    pub fn features(&self) -> &[FeatureDefinition] {
        &self.features
    }

    /// Model identifiers in schema order.
    pub fn identifiers(&self) -> Vec<&str> {
        self.features
            .iter()
            .map(|f| f.model_identifier.as_str())
            .collect()
    }

    /// Display names in schema order.
    pub fn display_names(&self) -> Vec<&str> {
        self.features.iter().map(|f| f.display_name.as_str()).collect()
    }

    pub fn by_display_name(&self, name: &str) -> Option<&FeatureDefinition> {
        self.features.iter().find(|f| f.display_name == name)
    }

    pub fn by_identifier(&self, identifier: &str) -> Option<&FeatureDefinition> {
        self.features
            .iter()
            .find(|f| f.model_identifier == identifier)
    }
}

impl Default for FeatureSchema {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a FeatureSchema {
    type Item = &'a FeatureDefinition;
    type IntoIter = std::slice::Iter<'a, FeatureDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.features.iter()
    }
}
