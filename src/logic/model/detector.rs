//! Model-Based Detector
//!
//! Per-point scoring against a `ModelProvider`: scale the vector, read
//! both classifier probabilities and the outlier label, tier the
//! probabilities into findings. Output is sparse - points producing no
//! findings and no outlier flag are silently skipped.

use crate::constants::DetectionThresholds;
use crate::logic::assemble::assemble;
use crate::logic::describe::{describe, GENERAL_DESCRIPTION, GENERAL_DETAILS};
use crate::logic::features::FeatureFrame;
use crate::logic::indicators::{cardiac_indicators, stroke_indicators};
use crate::logic::model::provider::{InferenceError, ModelProvider};
use crate::logic::signal::{AnomalyRecord, RiskFinding, RiskType, Severity};

/// Run model-based detection with default thresholds.
pub fn detect_with_models(
    provider: &dyn ModelProvider,
    frame: &FeatureFrame,
) -> Result<Vec<AnomalyRecord>, InferenceError> {
    detect_with_models_and_thresholds(provider, frame, &DetectionThresholds::default())
}

/// Run model-based detection with custom thresholds.
///
/// Any inference error aborts the whole call; the engine recovers by
/// re-running it on the threshold path.
pub fn detect_with_models_and_thresholds(
    provider: &dyn ModelProvider,
    frame: &FeatureFrame,
    thresholds: &DetectionThresholds,
) -> Result<Vec<AnomalyRecord>, InferenceError> {
    let mut records = Vec::new();

    for (raw, &timestamp) in frame.vectors.iter().zip(frame.timestamps.iter()) {
        let scaled = provider.scale(raw);

        let stroke_prob = provider.predict_proba_stroke(&scaled)?;
        let cardiac_prob = provider.predict_proba_cardiac(&scaled)?;
        let outlier = provider.predict_outlier(&scaled)?;

        let mut risks = Vec::new();

        if let Some(severity) = probability_tier(stroke_prob, thresholds) {
            risks.push(RiskFinding {
                risk_type: RiskType::Stroke,
                probability: stroke_prob,
                severity,
                indicators: stroke_indicators(raw),
            });
        }

        if let Some(severity) = probability_tier(cardiac_prob, thresholds) {
            risks.push(RiskFinding {
                risk_type: RiskType::CardiacEvent,
                probability: cardiac_prob,
                severity,
                indicators: cardiac_indicators(raw),
            });
        }

        if !risks.is_empty() {
            let (description, details) = describe(&risks);
            records.push(assemble(timestamp, risks, description, details));
        } else if outlier {
            // Outlier with no classified risk: unclassified anomaly
            records.push(assemble(
                timestamp,
                risks,
                GENERAL_DESCRIPTION.to_string(),
                GENERAL_DETAILS.to_string(),
            ));
        }
    }

    Ok(records)
}

/// Tier a classifier probability: above high = High, above medium =
/// Medium, otherwise no finding at all.
fn probability_tier(probability: f32, thresholds: &DetectionThresholds) -> Option<Severity> {
    if probability > thresholds.high_risk_min {
        Some(Severity::High)
    } else if probability > thresholds.medium_risk_min {
        Some(Severity::Medium)
    } else {
        None
    }
}

// ============================================================================
// TESTS
// ============================================================================
