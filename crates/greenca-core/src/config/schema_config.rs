//! Feature schema configuration.

use serde::{Deserialize, Serialize};

/// Where the feature schema comes from.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SchemaConfig {
    /// Path to a TOML schema file replacing the built-in catalog.
    pub path: Option<String>,
}
