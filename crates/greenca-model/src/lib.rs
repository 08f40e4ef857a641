//! # greenca-model
//!
//! Loads the pre-trained classifier artifact into an immutable handle and
//! enforces the record contract at the model boundary.
//!
//! ## Artifact formats
//!
//! | Format | Provider | Feature names from |
//! |--------|----------|--------------------|
//! | JSON linear classifier | `LinearModel` | `feature_names_in` in the artifact |
//! | ONNX (feature `onnx`) | `OnnxModel` | the active schema |
//!
//! Every provider checks the record's key set and order with
//! [`feature_check::check_record`] before computing anything.

pub mod artifact;
pub mod feature_check;
pub mod loader;
pub mod providers;
pub mod verify;

pub use artifact::LinearArtifact;
pub use loader::load_model;
pub use providers::LinearModel;
#[cfg(feature = "onnx")]
pub use providers::OnnxModel;
pub use verify::{verify_schema, SchemaVerification};
