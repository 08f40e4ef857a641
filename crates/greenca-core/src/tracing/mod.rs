//! Observability for greenca.
//! `tracing` crate with `EnvFilter`, per-crate log levels, stderr output.

pub mod setup;

pub use setup::init_tracing;
