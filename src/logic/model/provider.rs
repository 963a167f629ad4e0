//! Model Provider Capability
//!
//! Abstract surface the detector scores against: one feature scaler,
//! two probability classifiers, one one-class outlier model. Loaded
//! once at startup, treated as immutable afterwards; absence of a
//! provider is the sole trigger for the threshold fallback path.

use serde::{Deserialize, Serialize};

use crate::logic::features::{FeatureVector, FEATURE_COUNT};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Artifact loading failure. Recoverable: the engine logs it and runs
/// the threshold path instead.
#[derive(Debug)]
pub struct ModelLoadError(pub String);

impl std::fmt::Display for ModelLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ModelLoadError: {}", self.0)
    }
}

impl std::error::Error for ModelLoadError {}

/// Per-call inference failure. Recoverable: the engine logs it and
/// re-runs the call on the threshold path.
#[derive(Debug)]
pub struct InferenceError(pub String);

impl std::fmt::Display for InferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InferenceError: {}", self.0)
    }
}

impl std::error::Error for InferenceError {}

// ============================================================================
// PROVIDER TRAIT
// ============================================================================

/// Trained-model capability consumed by the model-based detector.
pub trait ModelProvider: Send + Sync {
    /// Standardize a raw feature vector with the fitted scaler.
    fn scale(&self, features: &FeatureVector) -> FeatureVector;

    /// Positive-class probability of the stroke classifier.
    fn predict_proba_stroke(&self, scaled: &FeatureVector) -> Result<f32, InferenceError>;

    /// Positive-class probability of the cardiac classifier.
    fn predict_proba_cardiac(&self, scaled: &FeatureVector) -> Result<f32, InferenceError>;

    /// One-class outlier label: true = the point lies outside the
    /// learned normal manifold.
    fn predict_outlier(&self, scaled: &FeatureVector) -> Result<bool, InferenceError>;
}

// ============================================================================
// SCALER PARAMETERS
// ============================================================================

/// Standardization parameters fitted at training time
/// (zero mean / unit variance per feature).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalerParams {
    pub mean: Vec<f32>,
    pub std: Vec<f32>,
}

impl Default for ScalerParams {
    fn default() -> Self {
        Self {
            mean: vec![0.0; FEATURE_COUNT],
            std: vec![1.0; FEATURE_COUNT],
        }
    }
}

impl ScalerParams {
    /// Load from a JSON artifact file.
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, ModelLoadError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ModelLoadError(format!("Failed to read {}: {}", path.display(), e)))?;
        let params: ScalerParams = serde_json::from_str(&raw)
            .map_err(|e| ModelLoadError(format!("Failed to parse {}: {}", path.display(), e)))?;

        if params.mean.len() != FEATURE_COUNT || params.std.len() != FEATURE_COUNT {
            return Err(ModelLoadError(format!(
                "Scaler shape mismatch: expected {} features, got mean={} std={}",
                FEATURE_COUNT,
                params.mean.len(),
                params.std.len()
            )));
        }
        Ok(params)
    }

    /// Apply `(x - mean) / std` per feature, guarding zero variance.
    pub fn transform(&self, features: &FeatureVector) -> FeatureVector {
        let mut scaled = [0.0f32; FEATURE_COUNT];
        for i in 0..FEATURE_COUNT {
            let mean = self.mean.get(i).copied().unwrap_or(0.0);
            let std = self.std.get(i).copied().unwrap_or(1.0).max(1e-8);
            scaled[i] = (features[i] - mean) / std;
        }
        scaled
    }
}

// ============================================================================
// TEST SUPPORT
// ============================================================================

/// Fixed-output provider for exercising the detector without ONNX
/// artifacts.
#[cfg(test)]
pub(crate) struct StubProvider {
    pub stroke_prob: f32,
    pub cardiac_prob: f32,
    pub outlier: bool,
    pub fail: bool,
}

#[cfg(test)]
impl StubProvider {
    pub fn quiet() -> Self {
        Self {
            stroke_prob: 0.0,
            cardiac_prob: 0.0,
            outlier: false,
            fail: false,
        }
    }
}

#[cfg(test)]
impl ModelProvider for StubProvider {
    fn scale(&self, features: &FeatureVector) -> FeatureVector {
        *features
    }

    fn predict_proba_stroke(&self, _scaled: &FeatureVector) -> Result<f32, InferenceError> {
        if self.fail {
            return Err(InferenceError("stub failure".to_string()));
        }
        Ok(self.stroke_prob)
    }

    fn predict_proba_cardiac(&self, _scaled: &FeatureVector) -> Result<f32, InferenceError> {
        if self.fail {
            return Err(InferenceError("stub failure".to_string()));
        }
        Ok(self.cardiac_prob)
    }

    fn predict_outlier(&self, _scaled: &FeatureVector) -> Result<bool, InferenceError> {
        if self.fail {
            return Err(InferenceError("stub failure".to_string()));
        }
        Ok(self.outlier)
    }
}

// ============================================================================
// TESTS
// ============================================================================
