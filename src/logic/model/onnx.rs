//! ONNX Model Provider
//!
//! Concrete `ModelProvider` backed by three ONNX Runtime sessions plus
//! a JSON scaler artifact. All four artifacts must load or the whole
//! provider is unavailable (the engine then runs the threshold path).

use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::RwLock;

use super::provider::{InferenceError, ModelLoadError, ModelProvider, ScalerParams};
use crate::logic::features::{FeatureVector, FEATURE_COUNT};

/// Artifact file names inside the model directory
pub const SCALER_FILE: &str = "scaler.json";
pub const STROKE_MODEL_FILE: &str = "stroke_predictor.onnx";
pub const HEART_MODEL_FILE: &str = "heart_predictor.onnx";
pub const ANOMALY_MODEL_FILE: &str = "anomaly_detector.onnx";

/// Provider over the fitted scaler, the stroke and cardiac
/// classifiers, and the one-class anomaly model.
///
/// Sessions are lock-wrapped because `ort` takes `&mut` to run; the
/// artifacts themselves are immutable after load.
#[derive(Debug)]
pub struct OnnxModelProvider {
    scaler: ScalerParams,
    stroke: RwLock<Session>,
    cardiac: RwLock<Session>,
    outlier: RwLock<Session>,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

impl OnnxModelProvider {
    /// Load all four artifacts from a directory.
    pub fn load(model_dir: &Path) -> Result<Self, ModelLoadError> {
        log::info!("Loading model artifacts from: {}", model_dir.display());

        let scaler = ScalerParams::from_json_file(&model_dir.join(SCALER_FILE))?;
        let stroke = load_session(&model_dir.join(STROKE_MODEL_FILE))?;
        let cardiac = load_session(&model_dir.join(HEART_MODEL_FILE))?;
        let outlier = load_session(&model_dir.join(ANOMALY_MODEL_FILE))?;

        log::info!("Model artifacts loaded successfully");

        Ok(Self {
            scaler,
            stroke: RwLock::new(stroke),
            cardiac: RwLock::new(cardiac),
            outlier: RwLock::new(outlier),
            loaded_at: chrono::Utc::now(),
        })
    }
}

fn load_session(path: &Path) -> Result<Session, ModelLoadError> {
    if !path.exists() {
        return Err(ModelLoadError(format!("Model not found: {}", path.display())));
    }

    Session::builder()
        .map_err(|e| ModelLoadError(format!("Failed to create session builder: {}", e)))?
        .with_optimization_level(GraphOptimizationLevel::Level3)
        .map_err(|e| ModelLoadError(format!("Failed to set optimization: {}", e)))?
        .commit_from_file(path)
        .map_err(|e| ModelLoadError(format!("Failed to load {}: {}", path.display(), e)))
}

/// Positive-class probability from a classifier session.
///
/// sklearn-exported classifiers emit a label output and a probability
/// output; take the last value of the first float tensor holding at
/// least two values, falling back to a single-value score.
fn run_probability(
    session: &RwLock<Session>,
    scaled: &FeatureVector,
) -> Result<f32, InferenceError> {
    let mut guard = session.write();
    let output_names: Vec<String> = guard.outputs().iter().map(|o| o.name().to_string()).collect();

    let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), scaled.to_vec())
        .map_err(|e| InferenceError(format!("Array error: {}", e)))?;
    let input_tensor = Value::from_array(input_array)
        .map_err(|e| InferenceError(format!("Tensor error: {}", e)))?;

    let outputs = guard
        .run(ort::inputs![input_tensor])
        .map_err(|e| InferenceError(format!("Inference failed: {}", e)))?;

    let mut single_value = None;
    for name in &output_names {
        let Some(output) = outputs.get(name) else {
            continue;
        };
        if let Ok(tensor) = output.try_extract_tensor::<f32>() {
            let data = tensor.1;
            if data.len() >= 2 {
                return Ok(data[data.len() - 1].clamp(0.0, 1.0));
            }
            if let Some(&value) = data.first() {
                single_value = Some(value.clamp(0.0, 1.0));
            }
        }
    }

    single_value.ok_or_else(|| InferenceError("No probability output".to_string()))
}

/// One-class label from the anomaly session: -1 = outlier.
fn run_outlier(session: &RwLock<Session>, scaled: &FeatureVector) -> Result<bool, InferenceError> {
    let mut guard = session.write();
    let output_names: Vec<String> = guard.outputs().iter().map(|o| o.name().to_string()).collect();

    let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), scaled.to_vec())
        .map_err(|e| InferenceError(format!("Array error: {}", e)))?;
    let input_tensor = Value::from_array(input_array)
        .map_err(|e| InferenceError(format!("Tensor error: {}", e)))?;

    let outputs = guard
        .run(ort::inputs![input_tensor])
        .map_err(|e| InferenceError(format!("Inference failed: {}", e)))?;

    for name in &output_names {
        let Some(output) = outputs.get(name) else {
            continue;
        };
        if let Ok(tensor) = output.try_extract_tensor::<i64>() {
            if let Some(&label) = tensor.1.first() {
                return Ok(label < 0);
            }
        }
        if let Ok(tensor) = output.try_extract_tensor::<f32>() {
            if let Some(&label) = tensor.1.first() {
                return Ok(label < 0.0);
            }
        }
    }

    Err(InferenceError("No label output".to_string()))
}

impl ModelProvider for OnnxModelProvider {
    fn scale(&self, features: &FeatureVector) -> FeatureVector {
        self.scaler.transform(features)
    }

    fn predict_proba_stroke(&self, scaled: &FeatureVector) -> Result<f32, InferenceError> {
        run_probability(&self.stroke, scaled)
    }

    fn predict_proba_cardiac(&self, scaled: &FeatureVector) -> Result<f32, InferenceError> {
        run_probability(&self.cardiac, scaled)
    }

    fn predict_outlier(&self, scaled: &FeatureVector) -> Result<bool, InferenceError> {
        run_outlier(&self.outlier, scaled)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_directory_is_recoverable_error() {
        let err = OnnxModelProvider::load(Path::new("/nonexistent/models")).unwrap_err();
        assert!(err.to_string().contains("ModelLoadError"));
    }

    #[test]
    fn test_partial_artifacts_fail_load() {
        // scaler present, models absent => unavailable as a whole
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(SCALER_FILE),
            r#"{"mean":[0.0,0.0,0.0,0.0,0.0],"std":[1.0,1.0,1.0,1.0,1.0]}"#,
        )
        .unwrap();

        let err = OnnxModelProvider::load(dir.path()).unwrap_err();
        assert!(err.0.contains(STROKE_MODEL_FILE));
    }
}
