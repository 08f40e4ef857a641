//! Top-level greenca configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{InputConfig, ModelConfig, ObservabilityConfig, SchemaConfig};
use crate::constants::PROJECT_CONFIG_FILENAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`GREENCA_*`)
/// 3. Project config (`greenca.toml` in the project root)
/// 4. User config (`~/.greenca/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GreencaConfig {
    pub model: ModelConfig,
    pub schema: SchemaConfig,
    pub input: InputConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub artifact_path: Option<String>,
    pub schema_path: Option<String>,
    pub out_of_range: Option<super::OutOfRangePolicy>,
    pub log_level: Option<String>,
}

impl GreencaConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. A broken user file is reported, a
        // missing one is not.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from an explicit file, skipping project/user lookup.
    pub fn load_file(path: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let mut config = Self::default();
        Self::merge_toml_file(&mut config, path)?;
        Self::apply_env_overrides(&mut config)?;
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &GreencaConfig) -> Result<(), ConfigError> {
        if let Some(ref path) = config.model.artifact_path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "model.artifact_path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref path) = config.schema.path {
            if path.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "schema.path".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        if let Some(ref level) = config.observability.log_level {
            if level.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "observability.log_level".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".greenca").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut GreencaConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: GreencaConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut GreencaConfig, other: &GreencaConfig) {
        if other.model.artifact_path.is_some() {
            base.model.artifact_path = other.model.artifact_path.clone();
        }
        if other.model.format.is_some() {
            base.model.format = other.model.format;
        }
        if other.model.strict_feature_names.is_some() {
            base.model.strict_feature_names = other.model.strict_feature_names;
        }
        if other.schema.path.is_some() {
            base.schema.path = other.schema.path.clone();
        }
        if other.input.out_of_range.is_some() {
            base.input.out_of_range = other.input.out_of_range;
        }
        if other.observability.log_level.is_some() {
            base.observability.log_level = other.observability.log_level.clone();
        }
        if other.observability.json.is_some() {
            base.observability.json = other.observability.json;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `GREENCA_MODEL_ARTIFACT_PATH`, `GREENCA_INPUT_OUT_OF_RANGE`, etc.
    fn apply_env_overrides(config: &mut GreencaConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("GREENCA_MODEL_ARTIFACT_PATH") {
            config.model.artifact_path = Some(val);
        }
        if let Ok(val) = std::env::var("GREENCA_MODEL_FORMAT") {
            let format = val.parse::<super::ModelFormat>().map_err(|message| ConfigError::ValidationFailed {
                field: "GREENCA_MODEL_FORMAT".to_string(),
                message,
            })?;
            config.model.format = Some(format);
        }
        if let Ok(val) = std::env::var("GREENCA_MODEL_STRICT_FEATURE_NAMES") {
            config.model.strict_feature_names =
                Some(parse_env_bool("GREENCA_MODEL_STRICT_FEATURE_NAMES", &val)?);
        }
        if let Ok(val) = std::env::var("GREENCA_SCHEMA_PATH") {
            config.schema.path = Some(val);
        }
        if let Ok(val) = std::env::var("GREENCA_INPUT_OUT_OF_RANGE") {
            let policy = val.parse::<super::OutOfRangePolicy>().map_err(|message| ConfigError::ValidationFailed {
                field: "GREENCA_INPUT_OUT_OF_RANGE".to_string(),
                message,
            })?;
            config.input.out_of_range = Some(policy);
        }
        if let Ok(val) = std::env::var("GREENCA_LOG_JSON") {
            config.observability.json = Some(parse_env_bool("GREENCA_LOG_JSON", &val)?);
        }
        Ok(())
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(config: &mut GreencaConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.artifact_path {
            config.model.artifact_path = Some(v.clone());
        }
        if let Some(ref v) = cli.schema_path {
            config.schema.path = Some(v.clone());
        }
        if let Some(v) = cli.out_of_range {
            config.input.out_of_range = Some(v);
        }
        if let Some(ref v) = cli.log_level {
            config.observability.log_level = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Parse a boolean env override; anything but `true`/`false` is rejected.
fn parse_env_bool(var: &str, val: &str) -> Result<bool, ConfigError> {
    val.trim()
        .parse::<bool>()
        .map_err(|_| ConfigError::ValidationFailed {
            field: var.to_string(),
            message: format!("expected true or false, got {val:?}"),
        })
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
