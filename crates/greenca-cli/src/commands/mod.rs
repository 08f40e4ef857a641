//! Subcommand implementations. Each writes to the given output and returns
//! the process exit code.

pub mod predict;
pub mod schema;
pub mod verify;

use std::process::ExitCode;

/// Prediction produced (or verification passed).
pub const EXIT_OK: u8 = 0;
/// The request failed; the process could serve another one.
pub const EXIT_REQUEST_FAILED: u8 = 1;
/// Startup failed: config, schema, or model artifact.
pub const EXIT_FATAL: u8 = 2;

pub fn exit_code(code: u8) -> ExitCode {
    ExitCode::from(code)
}
