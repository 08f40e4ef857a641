//! Configuration system for greenca.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod greenca_config;
pub mod input_config;
pub mod model_config;
pub mod observability_config;
pub mod schema_config;

pub use greenca_config::{CliOverrides, GreencaConfig};
pub use input_config::{InputConfig, OutOfRangePolicy};
pub use model_config::{ModelConfig, ModelFormat};
pub use observability_config::ObservabilityConfig;
pub use schema_config::SchemaConfig;
