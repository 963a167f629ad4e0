//! Detection Engine - Entry Point
//!
//! Owns the (optional) model provider and dispatches each `detect`
//! call to exactly one path: model-based when a provider is present
//! and healthy, threshold-based otherwise. Never fails - the worst
//! outcome is an empty output sequence.

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::logic::features::build_features;
use crate::logic::model::detector::detect_with_models;
use crate::logic::model::onnx::OnnxModelProvider;
use crate::logic::model::provider::ModelProvider;
use crate::logic::signal::{AnomalyRecord, EcgSample, EegSample};
use crate::logic::threshold::detect_windows;

/// Dual-path anomaly detection over paired ECG/EEG streams.
///
/// The provider is loaded once at construction and treated as
/// immutable; [`DetectionEngine::replace_provider`] is the only way to
/// change it afterwards (e.g. after retraining).
pub struct DetectionEngine {
    provider: RwLock<Option<Arc<dyn ModelProvider>>>,
}

impl DetectionEngine {
    /// Engine with an explicit provider (or none, forcing the
    /// threshold path).
    pub fn new(provider: Option<Arc<dyn ModelProvider>>) -> Self {
        Self {
            provider: RwLock::new(provider),
        }
    }

    /// Engine with no trained models - every call uses the threshold
    /// path.
    pub fn without_models() -> Self {
        Self::new(None)
    }

    /// Engine loading ONNX artifacts from a directory. A load failure
    /// is recoverable: it logs and the engine runs without models.
    pub fn from_model_dir(model_dir: &Path) -> Self {
        match OnnxModelProvider::load(model_dir) {
            Ok(provider) => {
                log::info!("Detection engine running with trained models");
                Self::new(Some(Arc::new(provider)))
            }
            Err(e) => {
                log::warn!("{} - falling back to threshold-based detection", e);
                Self::without_models()
            }
        }
    }

    /// Engine loading artifacts from the configured model directory
    /// (`VITALTWIN_MODEL_DIR`, falling back to the default).
    pub fn from_env() -> Self {
        Self::from_model_dir(Path::new(&crate::constants::get_model_dir()))
    }

    /// Whether a trained provider is currently loaded.
    pub fn has_models(&self) -> bool {
        self.provider.read().is_some()
    }

    /// Swap the provider (e.g. after retraining). Passing `None`
    /// drops back to threshold-only detection.
    pub fn replace_provider(&self, provider: Option<Arc<dyn ModelProvider>>) {
        let loaded = provider.is_some();
        *self.provider.write() = provider;
        log::info!(
            "Model provider replaced (models loaded: {})",
            loaded
        );
    }

    /// Detect anomalies over paired sample streams.
    ///
    /// Streams are paired by index and truncated to the shorter
    /// length; an empty side yields an empty result. Records come back
    /// in evaluation order, chronologically non-decreasing.
    pub fn detect(&self, ecg: &[EcgSample], eeg: &[EegSample]) -> Vec<AnomalyRecord> {
        let frame = build_features(ecg, eeg);
        if frame.is_empty() {
            return Vec::new();
        }

        let provider = self.provider.read().clone();
        if let Some(provider) = provider {
            match detect_with_models(provider.as_ref(), &frame) {
                Ok(records) => return records,
                Err(e) => {
                    log::warn!("{} - using threshold-based detection", e);
                }
            }
        } else {
            log::debug!("No models loaded, using threshold-based detection");
        }

        detect_windows(ecg, eeg)
    }
}

// ============================================================================
// TESTS
// ============================================================================
