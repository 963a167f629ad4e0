//! Synthetic Signal Generation
//!
//! Deterministic (seeded) ECG/EEG stream generators used by the
//! crate's tests and by demo callers: a sinusoidal resting baseline
//! plus per-sample pattern injection - suppressed-alpha/elevated-delta
//! transients for stroke-like windows, inverted-and-depressed ECG
//! transients for cardiac-like windows. Model training stays out of
//! scope; these streams only exercise the detectors.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::logic::signal::{EcgSample, EegSample};

/// Baseline EEG band powers of a resting subject
const BASE_ALPHA: f32 = 0.5;
const BASE_BETA: f32 = 0.3;
const BASE_THETA: f32 = 0.4;
const BASE_DELTA: f32 = 0.2;

/// Sampling interval of the generated streams (ms)
const SAMPLE_INTERVAL_MS: i64 = 1000;

#[derive(Debug, Clone)]
pub struct SyntheticConfig {
    /// Number of co-sampled points to generate
    pub samples: usize,
    /// Uniform noise amplitude added to every channel
    pub noise_amplitude: f32,
    /// RNG seed, so test streams are reproducible
    pub seed: u64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            samples: 600,
            noise_amplitude: 0.05,
            seed: 42,
        }
    }
}

/// Generate paired baseline streams: slow sinusoidal ECG, steady EEG
/// band powers, 1 Hz co-sampling.
pub fn generate_baseline(config: &SyntheticConfig) -> (Vec<EcgSample>, Vec<EegSample>) {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut ecg = Vec::with_capacity(config.samples);
    let mut eeg = Vec::with_capacity(config.samples);

    for i in 0..config.samples {
        let timestamp = i as i64 * SAMPLE_INTERVAL_MS;
        let phase = i as f32 * 0.1;

        ecg.push(EcgSample {
            timestamp,
            value: phase.sin() * 0.5 + noise(&mut rng, config.noise_amplitude),
        });
        eeg.push(EegSample {
            timestamp,
            alpha: BASE_ALPHA + noise(&mut rng, config.noise_amplitude),
            beta: BASE_BETA + noise(&mut rng, config.noise_amplitude),
            theta: BASE_THETA + noise(&mut rng, config.noise_amplitude),
            delta: BASE_DELTA + noise(&mut rng, config.noise_amplitude),
        });
    }

    (ecg, eeg)
}

/// Overwrite one EEG sample with a stroke-like transient: alpha
/// suppressed, delta surging. Out-of-range indices are ignored.
pub fn inject_stroke_spike(eeg: &mut [EegSample], index: usize) {
    if let Some(sample) = eeg.get_mut(index) {
        sample.alpha = sample.alpha * 0.3 - 2.0;
        sample.delta = sample.delta * 2.0 + 2.0;
    }
}

/// Overwrite one ECG sample with a cardiac-like transient: inverted
/// and depressed, guaranteed negative. Out-of-range indices are
/// ignored.
pub fn inject_cardiac_spike(ecg: &mut [EcgSample], index: usize) {
    if let Some(sample) = ecg.get_mut(index) {
        sample.value = sample.value * -0.5 - 2.5;
    }
}

fn noise(rng: &mut StdRng, amplitude: f32) -> f32 {
    if amplitude > 0.0 {
        rng.gen_range(-amplitude..amplitude)
    } else {
        0.0
    }
}

// ============================================================================
// TESTS
// ============================================================================
