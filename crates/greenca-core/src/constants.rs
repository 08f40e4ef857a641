// Single source of truth for fixed values shared across crates.

/// Number of indicators the classifier was trained on.
pub const FEATURE_COUNT: usize = 21;

/// Display text for a class-0 prediction.
pub const LOW_ADVANTAGE_TEXT: &str = "Low comparative advantage";

/// Display text for a class-1 prediction.
pub const HIGH_ADVANTAGE_TEXT: &str = "High comparative advantage";

/// Title shown above the input form.
pub const APP_TITLE: &str = "Comparative advantage in exporting low-carbon technologies";

/// Project-level config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILENAME: &str = "greenca.toml";

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "GREENCA_LOG";
