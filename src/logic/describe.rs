//! Risk Describer
//!
//! Pure slot-filling of fixed templates. Shared by both detection
//! paths so the assembly wording never diverges between them.

use crate::logic::signal::{RiskFinding, Severity};

/// Description used when a record has no specific findings
pub const NO_RISK_DESCRIPTION: &str = "No specific risks detected";

/// Details used when a record has no specific findings
pub const NO_RISK_DETAILS: &str = "No specific risk details available";

/// Description for the model path's outlier-only case
pub const GENERAL_DESCRIPTION: &str = "Unusual signal pattern detected";

/// Details for the model path's outlier-only case
pub const GENERAL_DETAILS: &str = "General anomaly in signal patterns detected";

/// Build (description, details) for a set of findings.
///
/// Description: one sentence per finding, joined with ". ".
/// Details: per finding with indicators, a header line followed by one
/// "- indicator" line each, newline-joined.
pub fn describe(findings: &[RiskFinding]) -> (String, String) {
    if findings.is_empty() {
        return (NO_RISK_DESCRIPTION.to_string(), NO_RISK_DETAILS.to_string());
    }

    let description = findings
        .iter()
        .map(|finding| {
            let percent = (finding.probability * 100.0).round() as i32;
            let level = if finding.severity == Severity::High {
                "High"
            } else {
                "Moderate"
            };
            format!(
                "{} risk of {} detected ({}% probability)",
                level, finding.risk_type, percent
            )
        })
        .collect::<Vec<_>>()
        .join(". ");

    let mut detail_lines = Vec::new();
    for finding in findings {
        if finding.indicators.is_empty() {
            continue;
        }
        detail_lines.push(format!("{} risk indicators:", finding.risk_type));
        for indicator in &finding.indicators {
            detail_lines.push(format!("- {}", indicator));
        }
    }
    let details = detail_lines.join("\n");

    (description, details)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::signal::RiskType;

    fn finding(
        risk_type: RiskType,
        probability: f32,
        severity: Severity,
        indicators: &[&str],
    ) -> RiskFinding {
        RiskFinding {
            risk_type,
            probability,
            severity,
            indicators: indicators.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_empty_findings_use_fixed_strings() {
        let (description, details) = describe(&[]);
        assert_eq!(description, NO_RISK_DESCRIPTION);
        assert_eq!(details, NO_RISK_DETAILS);
    }

    #[test]
    fn test_high_severity_wording_and_percent() {
        let findings = vec![finding(RiskType::Stroke, 0.75, Severity::High, &[])];
        let (description, details) = describe(&findings);
        assert_eq!(
            description,
            "High risk of Stroke detected (75% probability)"
        );
        // No indicators => no detail lines
        assert_eq!(details, "");
    }

    #[test]
    fn test_moderate_wording() {
        let findings = vec![finding(RiskType::CardiacEvent, 0.5, Severity::Medium, &[])];
        let (description, _) = describe(&findings);
        assert_eq!(
            description,
            "Moderate risk of Heart Attack detected (50% probability)"
        );
    }

    #[test]
    fn test_multiple_findings_join_and_detail_layout() {
        let findings = vec![
            finding(
                RiskType::Stroke,
                0.8,
                Severity::High,
                &["Reduced alpha wave activity"],
            ),
            finding(
                RiskType::CardiacEvent,
                0.6,
                Severity::Medium,
                &["T wave inversion", "Low QRS voltage"],
            ),
        ];
        let (description, details) = describe(&findings);

        assert_eq!(
            description,
            "High risk of Stroke detected (80% probability). \
             Moderate risk of Heart Attack detected (60% probability)"
        );
        assert_eq!(
            details,
            "Stroke risk indicators:\n\
             - Reduced alpha wave activity\n\
             Heart Attack risk indicators:\n\
             - T wave inversion\n\
             - Low QRS voltage"
        );
    }
}
