//! # greenca-cli
//!
//! Terminal front end: the input boundary where raw user values are parsed,
//! range-checked and handed to the predictor as a complete form.

pub mod app;
pub mod cli;
pub mod collector;
pub mod commands;

pub use app::App;
pub use collector::InputCollector;
