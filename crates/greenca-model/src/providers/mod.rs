//! Model handle implementations.

pub mod linear;
#[cfg(feature = "onnx")]
pub mod onnx;

pub use linear::LinearModel;
#[cfg(feature = "onnx")]
pub use onnx::OnnxModel;
