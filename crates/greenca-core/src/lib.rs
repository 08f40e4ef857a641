//! # greenca-core
//!
//! Foundation crate for the greenca classifier front end.
//! Defines the feature schema, input record and prediction types, the
//! model handle trait, errors, config, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod schema;
pub mod traits;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::GreencaConfig;
pub use errors::{GreencaError, GreencaResult};
pub use models::{ComparativeAdvantage, DisplayLabel, InputRecord, Severity};
pub use schema::{FeatureDefinition, FeatureSchema};
pub use traits::IModelHandle;
