//! Central Detection Constants
//!
//! Single source of truth for every numeric design constant in the
//! detection engine. The values are behavioral contract: changing one
//! changes which signals get flagged.

use serde::{Deserialize, Serialize};

/// Probability above this = high-severity risk finding
pub const HIGH_RISK_THRESHOLD: f32 = 0.7;

/// Probability above this (and at or below high) = medium-severity risk finding
pub const MEDIUM_RISK_THRESHOLD: f32 = 0.4;

/// Samples per window in the threshold fallback path
pub const WINDOW_SIZE: usize = 10;

/// A sample is a window outlier when it deviates from the window mean
/// by more than this many standard deviations
pub const DEVIATION_SIGMA: f32 = 2.5;

/// Fixed probability assigned to findings from the threshold path
pub const FALLBACK_RISK_PROBABILITY: f32 = 0.6;

// ============================================
// Indicator extraction thresholds (raw, unscaled features)
// ============================================

/// Alpha band power below this = reduced alpha wave activity
pub const ALPHA_SUPPRESSION_THRESHOLD: f32 = 0.3;

/// Delta band power above this = elevated delta wave activity
pub const DELTA_ELEVATION_THRESHOLD: f32 = 1.5;

/// Beta band power above this = elevated beta wave activity (stroke rule)
pub const BETA_ELEVATION_THRESHOLD: f32 = 1.2;

/// |ECG| above this = significant amplitude variation
pub const ECG_AMPLITUDE_THRESHOLD: f32 = 2.0;

/// ECG below this = T wave inversion
pub const T_WAVE_INVERSION_THRESHOLD: f32 = -0.5;

/// |ECG| above this = ST segment deviation
pub const ST_DEVIATION_THRESHOLD: f32 = 1.8;

/// |ECG| below this = low QRS voltage
pub const LOW_QRS_THRESHOLD: f32 = 0.2;

/// Beta band power above this = elevated stress (cardiac rule)
pub const BETA_STRESS_THRESHOLD: f32 = 1.0;

// ============================================
// Model artifacts
// ============================================

/// Default directory holding the trained model artifacts
pub const DEFAULT_MODEL_DIR: &str = "models";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get model directory from environment or use default
pub fn get_model_dir() -> String {
    std::env::var("VITALTWIN_MODEL_DIR").unwrap_or_else(|_| DEFAULT_MODEL_DIR.to_string())
}

// ============================================
// Configurable thresholds (for runtime adjustment)
// ============================================

/// Detection thresholds shared by both paths (configurable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectionThresholds {
    /// Above this probability = high severity
    pub high_risk_min: f32,
    /// Above this probability (and at or below high) = medium severity
    pub medium_risk_min: f32,
    /// Z-score multiplier for window outlier tests
    pub deviation_sigma: f32,
    /// Window length for the fallback path
    pub window_size: usize,
    /// Probability assigned to fallback findings
    pub fallback_probability: f32,
}

impl Default for DetectionThresholds {
    fn default() -> Self {
        Self {
            high_risk_min: HIGH_RISK_THRESHOLD,
            medium_risk_min: MEDIUM_RISK_THRESHOLD,
            deviation_sigma: DEVIATION_SIGMA,
            window_size: WINDOW_SIZE,
            fallback_probability: FALLBACK_RISK_PROBABILITY,
        }
    }
}
