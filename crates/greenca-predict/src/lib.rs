//! # greenca-predict
//!
//! Turns collected form values into a display label:
//!
//! 1. [`assembler::assemble`] keys each value by its model identifier, in
//!    schema order.
//! 2. The model handle classifies the record.
//! 3. [`predictor::Predictor`] maps class 0/1 to the display text and turns
//!    every failure into a user-visible diagnostic.

pub mod assembler;
pub mod diagnostics;
pub mod predictor;

pub use assembler::assemble;
pub use predictor::{run, try_run, Predictor};
