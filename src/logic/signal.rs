//! Signal & Anomaly Types
//!
//! Core types for the detection engine. No logic here - only data
//! structures and their wire representation. Field and variant names
//! follow the JSON shape the transport layer already speaks
//! (lowercase severities, `type` for the category, "Heart Attack").

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// SAMPLES
// ============================================================================

/// One ECG voltage sample.
///
/// Timestamps are epoch milliseconds, monotonically non-decreasing
/// within a stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EcgSample {
    pub timestamp: i64,
    pub value: f32,
}

/// One EEG band-power sample (relative power per named frequency band).
///
/// Paired with the ECG stream by index, not by timestamp equality;
/// the caller guarantees co-sampling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EegSample {
    pub timestamp: i64,
    pub alpha: f32,
    pub beta: f32,
    pub theta: f32,
    pub delta: f32,
}

// ============================================================================
// SEVERITY
// ============================================================================

/// Risk severity with a total order: low < medium < high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Severity::Low => 0,
            Severity::Medium => 1,
            Severity::High => 2,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// RISK FINDINGS
// ============================================================================

/// Classified risk kinds produced by either detection path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskType {
    Stroke,
    #[serde(rename = "Heart Attack")]
    CardiacEvent,
}

impl RiskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskType::Stroke => "Stroke",
            RiskType::CardiacEvent => "Heart Attack",
        }
    }
}

impl std::fmt::Display for RiskType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One detected risk at a point or window. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFinding {
    #[serde(rename = "type")]
    pub risk_type: RiskType,
    /// Probability in [0, 1]
    pub probability: f32,
    pub severity: Severity,
    pub indicators: Vec<String>,
}

// ============================================================================
// ANOMALY RECORDS
// ============================================================================

/// Category of an anomaly record, derived from the risk types present.
/// `Combined` iff at least two distinct risk types; `General` iff none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnomalyCategory {
    Stroke,
    #[serde(rename = "Heart Attack")]
    CardiacEvent,
    Combined,
    General,
}

impl AnomalyCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyCategory::Stroke => "Stroke",
            AnomalyCategory::CardiacEvent => "Heart Attack",
            AnomalyCategory::Combined => "Combined",
            AnomalyCategory::General => "General",
        }
    }
}

impl std::fmt::Display for AnomalyCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle status of an anomaly record. The engine only ever emits
/// `Active`; downstream consumers own acknowledgement/resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnomalyStatus {
    Active,
}

/// Final anomaly record returned to the caller.
///
/// Created once per detected point/window, immutable thereafter,
/// appended to the output in evaluation (chronological) order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyRecord {
    pub id: Uuid,
    /// ISO-8601 local time, rendered from the sample's epoch milliseconds
    pub timestamp: String,
    #[serde(rename = "type")]
    pub category: AnomalyCategory,
    pub severity: Severity,
    pub description: String,
    pub details: String,
    pub risks: Vec<RiskFinding>,
    pub status: AnomalyStatus,
}

// ============================================================================
// TESTS
// ============================================================================
