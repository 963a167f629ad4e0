//! Anomaly Assembler
//!
//! Turns a set of findings plus their evaluation timestamp into the
//! final record: fresh id, ISO-8601 local timestamp, derived category
//! and severity. Performs no deduplication - adjacent or overlapping
//! detections each get their own record.

use chrono::{Local, TimeZone};
use uuid::Uuid;

use crate::logic::signal::{AnomalyCategory, AnomalyRecord, AnomalyStatus, RiskFinding, RiskType, Severity};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";

/// Assemble one anomaly record. Description/details come from the
/// caller so the model path can substitute the general-anomaly texts.
pub fn assemble(
    timestamp_ms: i64,
    risks: Vec<RiskFinding>,
    description: String,
    details: String,
) -> AnomalyRecord {
    AnomalyRecord {
        id: Uuid::new_v4(),
        timestamp: format_timestamp(timestamp_ms),
        category: derive_category(&risks),
        severity: derive_severity(&risks),
        description,
        details,
        risks,
        status: AnomalyStatus::Active,
    }
}

/// Category from the set of risk types: Combined iff both types
/// present, General iff no findings at all.
pub fn derive_category(risks: &[RiskFinding]) -> AnomalyCategory {
    let has_stroke = risks.iter().any(|r| r.risk_type == RiskType::Stroke);
    let has_cardiac = risks.iter().any(|r| r.risk_type == RiskType::CardiacEvent);

    match (has_stroke, has_cardiac) {
        (true, true) => AnomalyCategory::Combined,
        (true, false) => AnomalyCategory::Stroke,
        (false, true) => AnomalyCategory::CardiacEvent,
        (false, false) => AnomalyCategory::General,
    }
}

/// Severity = max finding severity, escalated to High when the
/// findings span both risk types. No findings = Low (the outlier-only
/// case).
pub fn derive_severity(risks: &[RiskFinding]) -> Severity {
    if risks.is_empty() {
        return Severity::Low;
    }

    if derive_category(risks) == AnomalyCategory::Combined {
        return Severity::High;
    }

    let mut max = Severity::Low;
    for risk in risks {
        if risk.severity.level() > max.level() {
            max = risk.severity;
        }
    }
    max
}

/// Render epoch milliseconds as ISO-8601 local time.
pub fn format_timestamp(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms).earliest() {
        Some(dt) => dt.format(TIMESTAMP_FORMAT).to_string(),
        None => {
            log::warn!("timestamp {} out of range, rendering epoch", timestamp_ms);
            Local
                .timestamp_millis_opt(0)
                .earliest()
                .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
                .unwrap_or_else(|| "1970-01-01T00:00:00.000".to_string())
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(risk_type: RiskType, severity: Severity) -> RiskFinding {
        RiskFinding {
            risk_type,
            probability: 0.6,
            severity,
            indicators: vec![],
        }
    }

    #[test]
    fn test_category_derivation() {
        assert_eq!(derive_category(&[]), AnomalyCategory::General);
        assert_eq!(
            derive_category(&[finding(RiskType::Stroke, Severity::Medium)]),
            AnomalyCategory::Stroke
        );
        assert_eq!(
            derive_category(&[finding(RiskType::CardiacEvent, Severity::Medium)]),
            AnomalyCategory::CardiacEvent
        );
        assert_eq!(
            derive_category(&[
                finding(RiskType::Stroke, Severity::Medium),
                finding(RiskType::CardiacEvent, Severity::Medium),
            ]),
            AnomalyCategory::Combined
        );
    }

    #[test]
    fn test_severity_max_wins() {
        let risks = vec![
            finding(RiskType::Stroke, Severity::Medium),
            finding(RiskType::Stroke, Severity::High),
        ];
        assert_eq!(derive_severity(&risks), Severity::High);
    }

    #[test]
    fn test_combined_escalates_to_high() {
        // Two medium findings of distinct types still escalate
        let risks = vec![
            finding(RiskType::Stroke, Severity::Medium),
            finding(RiskType::CardiacEvent, Severity::Medium),
        ];
        assert_eq!(derive_severity(&risks), Severity::High);
    }

    #[test]
    fn test_no_findings_is_low() {
        assert_eq!(derive_severity(&[]), Severity::Low);
    }

    #[test]
    fn test_assembled_record_shape() {
        let record = assemble(
            1_700_000_000_000,
            vec![finding(RiskType::Stroke, Severity::High)],
            "description".to_string(),
            "details".to_string(),
        );
        assert_eq!(record.category, AnomalyCategory::Stroke);
        assert_eq!(record.severity, Severity::High);
        assert_eq!(record.status, AnomalyStatus::Active);
        assert!(record.timestamp.contains('T'));
    }

    #[test]
    fn test_fresh_ids_per_record() {
        let a = assemble(0, vec![], "d".to_string(), "x".to_string());
        let b = assemble(0, vec![], "d".to_string(), "x".to_string());
        assert_ne!(a.id, b.id);
        assert_eq!(a.timestamp, b.timestamp);
    }

    #[test]
    fn test_timestamp_format_millis() {
        let ts = format_timestamp(1_700_000_000_123);
        // local-time rendering, millisecond precision, no offset suffix
        assert_eq!(ts.len(), "2023-11-14T22:13:20.123".len());
        assert!(ts.ends_with("123"));
    }
}
