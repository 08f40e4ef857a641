//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the greenca tracing/logging system.
///
/// Reads the `GREENCA_LOG` environment variable for per-crate log levels,
/// e.g. `GREENCA_LOG=greenca_model=debug,greenca_predict=info`.
/// Falls back to the configured level, then to `greenca=info`.
/// Output goes to stderr so stdout only carries results.
///
/// This function is idempotent: calling it multiple times is safe.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .or_else(|_| EnvFilter::try_new(config.effective_log_level()))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        // `try_init` so an embedding application's subscriber wins.
        let result = if config.effective_json() {
            tracing_subscriber::registry()
                .with(layer.json())
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(layer)
                .with(filter)
                .try_init()
        };
        if result.is_err() {
            tracing::debug!("global tracing subscriber already set");
        }
    });
}
