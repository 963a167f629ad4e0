//! Indicator Extraction
//!
//! Rule-based mapping from raw (unscaled) feature vectors to
//! human-readable risk indicators. Runs independently of the
//! classifier probabilities: a medium-probability finding can still
//! carry an empty indicator list, and vice versa.

use crate::constants::{
    ALPHA_SUPPRESSION_THRESHOLD, BETA_ELEVATION_THRESHOLD, BETA_STRESS_THRESHOLD,
    DELTA_ELEVATION_THRESHOLD, ECG_AMPLITUDE_THRESHOLD, LOW_QRS_THRESHOLD,
    ST_DEVIATION_THRESHOLD, T_WAVE_INVERSION_THRESHOLD,
};
use crate::logic::features::{FeatureVector, IDX_ALPHA, IDX_BETA, IDX_DELTA, IDX_ECG};

/// Stroke-pattern indicators: EEG band anomalies plus gross ECG swing.
pub fn stroke_indicators(features: &FeatureVector) -> Vec<String> {
    let mut indicators = Vec::new();

    if features[IDX_ALPHA] < ALPHA_SUPPRESSION_THRESHOLD {
        indicators.push("Reduced alpha wave activity".to_string());
    }
    if features[IDX_DELTA] > DELTA_ELEVATION_THRESHOLD {
        indicators.push("Elevated delta wave activity".to_string());
    }
    if features[IDX_BETA] > BETA_ELEVATION_THRESHOLD {
        indicators.push("Elevated beta wave activity".to_string());
    }
    if features[IDX_ECG].abs() > ECG_AMPLITUDE_THRESHOLD {
        indicators.push("Significant ECG amplitude variation".to_string());
    }

    indicators
}

/// Cardiac-pattern indicators: ECG morphology plus EEG stress marker.
pub fn cardiac_indicators(features: &FeatureVector) -> Vec<String> {
    let mut indicators = Vec::new();

    if features[IDX_ECG] < T_WAVE_INVERSION_THRESHOLD {
        indicators.push("T wave inversion".to_string());
    }
    if features[IDX_ECG].abs() > ST_DEVIATION_THRESHOLD {
        indicators.push("ST segment deviation".to_string());
    }
    if features[IDX_ECG].abs() < LOW_QRS_THRESHOLD {
        indicators.push("Low QRS voltage".to_string());
    }
    if features[IDX_BETA] > BETA_STRESS_THRESHOLD {
        indicators.push("Elevated stress levels (high beta activity)".to_string());
    }

    indicators
}

// ============================================================================
// TESTS
// ============================================================================
