//! Threshold Detector (fallback path)
//!
//! Deterministic statistical detection used whenever no trained model
//! provider is available. Operates over non-overlapping fixed-size
//! windows: per window, a sample is an outlier when it deviates from
//! the window mean by more than `DEVIATION_SIGMA` standard deviations.
//! A zero-variance window can never flag (no anomaly possible, not an
//! error). The final partial window, if any, is dropped.

use crate::constants::DetectionThresholds;
use crate::logic::assemble::assemble;
use crate::logic::describe::describe;
use crate::logic::signal::{AnomalyRecord, EcgSample, EegSample, RiskFinding, RiskType, Severity};

/// Static indicator list for fallback stroke findings
const STROKE_WINDOW_INDICATORS: [&str; 3] = [
    "Irregular EEG patterns",
    "Reduced alpha activity",
    "Elevated delta activity",
];

/// Static indicator list for fallback cardiac findings
const CARDIAC_WINDOW_INDICATORS: [&str; 3] = [
    "ECG irregularities",
    "T wave abnormalities",
    "Rhythm disturbances",
];

/// Run window-based detection with default thresholds.
pub fn detect_windows(ecg: &[EcgSample], eeg: &[EegSample]) -> Vec<AnomalyRecord> {
    detect_windows_with_thresholds(ecg, eeg, &DetectionThresholds::default())
}

/// Run window-based detection with custom thresholds.
pub fn detect_windows_with_thresholds(
    ecg: &[EcgSample],
    eeg: &[EegSample],
    thresholds: &DetectionThresholds,
) -> Vec<AnomalyRecord> {
    let len = ecg.len().min(eeg.len());
    let window = thresholds.window_size;
    let mut records = Vec::new();

    if window == 0 || len < window {
        return records;
    }

    for (ecg_window, eeg_window) in ecg[..len]
        .chunks_exact(window)
        .zip(eeg[..len].chunks_exact(window))
    {
        let stroke_risk = window_stroke_risk(eeg_window, thresholds.deviation_sigma);
        let cardiac_risk = window_cardiac_risk(ecg_window, thresholds.deviation_sigma);

        if !stroke_risk && !cardiac_risk {
            continue;
        }

        let mut risks = Vec::new();
        if stroke_risk {
            risks.push(window_finding(RiskType::Stroke, &STROKE_WINDOW_INDICATORS, thresholds));
        }
        if cardiac_risk {
            risks.push(window_finding(
                RiskType::CardiacEvent,
                &CARDIAC_WINDOW_INDICATORS,
                thresholds,
            ));
        }

        let (description, details) = describe(&risks);
        records.push(assemble(
            ecg_window[0].timestamp,
            risks,
            description,
            details,
        ));
    }

    records
}

/// Stroke pattern: at least two EEG bands show a window outlier, and
/// alpha and delta are both among them.
fn window_stroke_risk(eeg_window: &[EegSample], sigma: f32) -> bool {
    let alpha = band_anomalous(eeg_window, |s| s.alpha, sigma);
    let beta = band_anomalous(eeg_window, |s| s.beta, sigma);
    let theta = band_anomalous(eeg_window, |s| s.theta, sigma);
    let delta = band_anomalous(eeg_window, |s| s.delta, sigma);

    let flagged = [alpha, beta, theta, delta].iter().filter(|&&f| f).count();
    flagged >= 2 && alpha && delta
}

/// Cardiac pattern: an ECG window outlier together with at least one
/// negative sample (T-wave-inversion-like shape).
fn window_cardiac_risk(ecg_window: &[EcgSample], sigma: f32) -> bool {
    let values: Vec<f32> = ecg_window.iter().map(|s| s.value).collect();
    let (mean, std) = mean_std(&values);

    let has_outlier = values.iter().any(|v| (v - mean).abs() > sigma * std);
    let has_negative = values.iter().any(|&v| v < 0.0);

    has_outlier && has_negative
}

fn band_anomalous(eeg_window: &[EegSample], band: fn(&EegSample) -> f32, sigma: f32) -> bool {
    let values: Vec<f32> = eeg_window.iter().map(band).collect();
    let (mean, std) = mean_std(&values);
    values.iter().any(|v| (v - mean).abs() > sigma * std)
}

fn window_finding(
    risk_type: RiskType,
    indicators: &[&str],
    thresholds: &DetectionThresholds,
) -> RiskFinding {
    RiskFinding {
        risk_type,
        probability: thresholds.fallback_probability,
        severity: Severity::Medium,
        indicators: indicators.iter().map(|s| s.to_string()).collect(),
    }
}

/// Population mean/std, like the training pipeline computes them.
fn mean_std(values: &[f32]) -> (f32, f32) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    let n = values.len() as f32;
    let mean = values.iter().sum::<f32>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f32>() / n;
    (mean, variance.sqrt())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::signal::AnomalyCategory;

    fn ecg_series(values: &[f32]) -> Vec<EcgSample> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| EcgSample {
                timestamp: i as i64 * 1000,
                value,
            })
            .collect()
    }

    fn eeg_series(alpha: &[f32], beta: &[f32], theta: &[f32], delta: &[f32]) -> Vec<EegSample> {
        (0..alpha.len())
            .map(|i| EegSample {
                timestamp: i as i64 * 1000,
                alpha: alpha[i],
                beta: beta[i],
                theta: theta[i],
                delta: delta[i],
            })
            .collect()
    }

    fn spike_tail(n: usize, base: f32, spike: f32) -> Vec<f32> {
        let mut values = vec![base; n];
        values[n - 1] = spike;
        values
    }

    #[test]
    fn test_combined_spike_window() {
        // One 10-sample window: ECG spike to -5 plus alpha/delta spikes
        let ecg = ecg_series(&spike_tail(10, 0.0, -5.0));
        let eeg = eeg_series(
            &spike_tail(10, 0.0, 5.0),
            &[0.0; 10],
            &[0.0; 10],
            &spike_tail(10, 0.0, 5.0),
        );

        let records = detect_windows(&ecg, &eeg);
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.category, AnomalyCategory::Combined);
        assert_eq!(record.severity, Severity::High);
        assert_eq!(record.risks.len(), 2);
        assert!(record.risks.iter().all(|r| r.probability == 0.6));
        // window timestamp = first sample
        assert_eq!(record.timestamp, crate::logic::assemble::format_timestamp(0));
    }

    #[test]
    fn test_zero_variance_window_never_flags() {
        let ecg = ecg_series(&[-1.0; 10]);
        let eeg = eeg_series(&[0.5; 10], &[0.5; 10], &[0.5; 10], &[0.5; 10]);
        assert!(detect_windows(&ecg, &eeg).is_empty());
    }

    #[test]
    fn test_stroke_requires_alpha_and_delta() {
        // beta and theta spike, alpha/delta flat: no stroke pattern
        let ecg = ecg_series(&[1.0; 10]);
        let eeg = eeg_series(
            &[0.5; 10],
            &spike_tail(10, 0.0, 5.0),
            &spike_tail(10, 0.0, 5.0),
            &[0.5; 10],
        );
        assert!(detect_windows(&ecg, &eeg).is_empty());
    }

    #[test]
    fn test_cardiac_requires_negative_sample() {
        // Positive-only spike: outlier yes, negative sample no
        let ecg = ecg_series(&spike_tail(10, 1.0, 6.0));
        let eeg = eeg_series(&[0.5; 10], &[0.5; 10], &[0.5; 10], &[0.5; 10]);
        assert!(detect_windows(&ecg, &eeg).is_empty());
    }

    #[test]
    fn test_stroke_only_window_is_medium() {
        let ecg = ecg_series(&[1.0; 10]);
        let eeg = eeg_series(
            &spike_tail(10, 0.5, 5.0),
            &[0.5; 10],
            &[0.5; 10],
            &spike_tail(10, 0.5, 5.0),
        );
        let records = detect_windows(&ecg, &eeg);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].category, AnomalyCategory::Stroke);
        assert_eq!(records[0].severity, Severity::Medium);
        assert_eq!(
            records[0].risks[0].indicators,
            STROKE_WINDOW_INDICATORS.map(String::from).to_vec()
        );
    }

    #[test]
    fn test_partial_window_dropped() {
        // 15 samples: the trailing 5 never form a window, so the spike
        // at index 14 is invisible to this path
        let mut values = vec![0.0; 15];
        values[14] = -5.0;
        let ecg = ecg_series(&values);
        let eeg = eeg_series(&[0.5; 15], &[0.5; 15], &[0.5; 15], &[0.5; 15]);
        assert!(detect_windows(&ecg, &eeg).is_empty());
    }

    #[test]
    fn test_exact_multiple_uses_last_window() {
        // 20 samples with the spike pattern in the second window
        let mut ecg_values = vec![0.0; 20];
        ecg_values[19] = -5.0;
        let mut alpha = vec![0.0; 20];
        alpha[19] = 5.0;
        let mut delta = vec![0.0; 20];
        delta[19] = 5.0;

        let ecg = ecg_series(&ecg_values);
        let eeg = eeg_series(&alpha, &[0.0; 20], &[0.0; 20], &delta);

        let records = detect_windows(&ecg, &eeg);
        assert_eq!(records.len(), 1);
        // second window starts at sample 10
        assert_eq!(
            records[0].timestamp,
            crate::logic::assemble::format_timestamp(10_000)
        );
    }

    #[test]
    fn test_short_input_yields_nothing() {
        let ecg = ecg_series(&[-5.0; 5]);
        let eeg = eeg_series(&[5.0; 5], &[0.0; 5], &[0.0; 5], &[5.0; 5]);
        assert!(detect_windows(&ecg, &eeg).is_empty());
    }
}
