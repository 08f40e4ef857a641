//! Feature schema: the typed, ordered list of indicators the classifier
//! consumes, and the built-in catalog of the 21 indicators.

pub mod catalog;
pub mod feature;
pub mod feature_schema;

pub use feature::FeatureDefinition;
pub use feature_schema::FeatureSchema;
