//! Test fixture loader for greenca artifacts and example submissions.
//!
//! Provides typed deserialization of the fixture JSON files and helpers
//! for locating them from tests in any crate of the workspace.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Linear artifact fit on the built-in schema identifiers.
pub const GREEN_CA_ARTIFACT: &str = "artifacts/green_ca_logistic.json";
/// Same parameters, but keyed by display names instead of identifiers.
pub const DISPLAY_NAME_KEYED_ARTIFACT: &str = "artifacts/display_name_keyed.json";
/// Same parameters with the first two feature names swapped.
pub const SWAPPED_ORDER_ARTIFACT: &str = "artifacts/swapped_order.json";
/// Same parameters with a non-binary positive class.
pub const NONBINARY_CLASSES_ARTIFACT: &str = "artifacts/nonbinary_classes.json";
/// Truncated JSON.
pub const CORRUPT_ARTIFACT: &str = "artifacts/corrupt.json";
/// Example submission covering all 21 indicators.
pub const EXAMPLE_RECORD: &str = "records/example_record.json";

/// A recorded form submission and what the model should make of it.
#[derive(Debug, Clone, Deserialize)]
pub struct ExampleRecord {
    pub description: String,
    /// Display name to value, as the form collects them.
    pub values: HashMap<String, f64>,
    /// Identifiers the assembled record must carry, in order.
    pub expected_identifiers: Vec<String>,
    /// Class the fixture artifact predicts for `values`.
    pub expected_class: i64,
}

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load the example submission.
pub fn example_record() -> ExampleRecord {
    load_fixture(EXAMPLE_RECORD)
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}
