//! Model Path - Trained-Model Detection
//!
//! - `provider` - the `ModelProvider` capability and scaler parameters
//! - `onnx` - concrete provider backed by ONNX Runtime sessions
//! - `detector` - per-point scoring against the provider

pub mod detector;
pub mod onnx;
pub mod provider;

pub use provider::{InferenceError, ModelLoadError, ModelProvider, ScalerParams};
