//! Feature Builder
//!
//! Aligns the ECG and EEG streams into per-timestep feature vectors.
//! The layout is fixed: models are trained against this exact ordering,
//! so it must never be reordered without retraining.

use crate::logic::signal::{EcgSample, EegSample};

/// Number of features per timestep
pub const FEATURE_COUNT: usize = 5;

/// Feature ordering. Index positions are part of the model contract.
pub const FEATURE_LAYOUT: [&str; FEATURE_COUNT] =
    ["ecg_value", "eeg_alpha", "eeg_beta", "eeg_theta", "eeg_delta"];

/// Layout indices for rule code that reads single features
pub const IDX_ECG: usize = 0;
pub const IDX_ALPHA: usize = 1;
pub const IDX_BETA: usize = 2;
pub const IDX_THETA: usize = 3;
pub const IDX_DELTA: usize = 4;

/// One feature vector in `FEATURE_LAYOUT` order. Owned transiently by
/// the detectors, never persisted.
pub type FeatureVector = [f32; FEATURE_COUNT];

/// Get feature name by layout index
pub fn feature_name(index: usize) -> Option<&'static str> {
    FEATURE_LAYOUT.get(index).copied()
}

/// Feature vectors plus the original timestamps they were built from.
#[derive(Debug, Clone, Default)]
pub struct FeatureFrame {
    pub vectors: Vec<FeatureVector>,
    /// Epoch milliseconds, taken from the ECG stream
    pub timestamps: Vec<i64>,
}

impl FeatureFrame {
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }
}

/// Build feature vectors from paired streams.
///
/// Streams are paired by index and truncated to the shorter length.
/// An empty input on either side yields an empty frame - shape
/// mismatch is not an error, callers must tolerate an empty result.
pub fn build_features(ecg: &[EcgSample], eeg: &[EegSample]) -> FeatureFrame {
    let len = ecg.len().min(eeg.len());
    let mut frame = FeatureFrame {
        vectors: Vec::with_capacity(len),
        timestamps: Vec::with_capacity(len),
    };

    for i in 0..len {
        frame.vectors.push([
            ecg[i].value,
            eeg[i].alpha,
            eeg[i].beta,
            eeg[i].theta,
            eeg[i].delta,
        ]);
        frame.timestamps.push(ecg[i].timestamp);
    }

    frame
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ecg(ts: i64, value: f32) -> EcgSample {
        EcgSample { timestamp: ts, value }
    }

    fn eeg(ts: i64) -> EegSample {
        EegSample {
            timestamp: ts,
            alpha: 0.5,
            beta: 0.3,
            theta: 0.4,
            delta: 0.2,
        }
    }

    #[test]
    fn test_layout_order() {
        assert_eq!(feature_name(IDX_ECG), Some("ecg_value"));
        assert_eq!(feature_name(IDX_DELTA), Some("eeg_delta"));
        assert_eq!(feature_name(FEATURE_COUNT), None);
    }

    #[test]
    fn test_truncates_to_shorter_stream() {
        let ecg_data = vec![ecg(0, 0.1), ecg(1000, 0.2), ecg(2000, 0.3)];
        let eeg_data = vec![eeg(0), eeg(1000)];

        let frame = build_features(&ecg_data, &eeg_data);
        assert_eq!(frame.len(), 2);
        assert_eq!(frame.timestamps, vec![0, 1000]);
        assert_eq!(frame.vectors[1], [0.2, 0.5, 0.3, 0.4, 0.2]);
    }

    #[test]
    fn test_empty_input_yields_empty_frame() {
        let frame = build_features(&[], &[eeg(0)]);
        assert!(frame.is_empty());

        let frame = build_features(&[ecg(0, 1.0)], &[]);
        assert!(frame.is_empty());
    }
}
