//! VitalTwin Core - Biosignal Risk Detection Engine
//!
//! Ingests co-sampled ECG and EEG band-power streams and produces a
//! timestamped sequence of anomaly records classifying stroke risk,
//! cardiac-event risk, and unclassified signal anomalies.
//!
//! Two detection paths share one output contract:
//! - Model path: trained ONNX classifiers over scaled feature vectors
//! - Threshold path: rolling window statistics (fallback when no models)
//!
//! The web transport layer is an external collaborator: it calls
//! [`DetectionEngine::detect`] with arrays of timestamped samples and
//! serializes the returned records itself. Outputs are heuristic risk
//! signals, not diagnoses.

pub mod constants;
pub mod logic;

pub use logic::engine::DetectionEngine;
pub use logic::model::onnx::OnnxModelProvider;
pub use logic::model::provider::{InferenceError, ModelLoadError, ModelProvider, ScalerParams};
pub use logic::signal::{
    AnomalyCategory, AnomalyRecord, AnomalyStatus, EcgSample, EegSample, RiskFinding, RiskType,
    Severity,
};
