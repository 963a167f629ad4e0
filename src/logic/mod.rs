//! Logic Module - Detection Engines
//!
//! Module map:
//! - `signal` - sample, finding and anomaly-record types
//! - `features` - ECG/EEG alignment into feature vectors
//! - `model/` - trained-model path (provider, ONNX backend, detector)
//! - `threshold` - statistical fallback path
//! - `indicators`, `describe`, `assemble` - shared finding synthesis
//! - `engine` - entry point dispatching between the two paths
//! - `synthetic` - seeded signal generators for tests and demos

pub mod assemble;
pub mod describe;
pub mod engine;
pub mod features;
pub mod indicators;
pub mod model;
pub mod signal;
pub mod synthetic;
pub mod threshold;
