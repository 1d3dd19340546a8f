//! Assessment result types.
//!
//! Represents the output of the stroke risk assessor.

use serde::{Deserialize, Serialize};

/// Score at or above which a patient is classified High risk.
pub const HIGH_RISK_THRESHOLD: u32 = 50;

/// Score at or above which a patient is classified Moderate risk.
pub const MODERATE_RISK_THRESHOLD: u32 = 30;

const HIGH_RISK_RECOMMENDATIONS: [&str; 4] = [
    "Seek immediate medical consultation",
    "Monitor blood pressure regularly",
    "Take prescribed medications consistently",
    "Make lifestyle changes immediately",
];

const MODERATE_RISK_RECOMMENDATIONS: [&str; 4] = [
    "Schedule regular check-ups",
    "Maintain a healthy diet",
    "Exercise regularly",
    "Monitor vital signs",
];

const LOW_RISK_RECOMMENDATIONS: [&str; 4] = [
    "Maintain a healthy lifestyle",
    "Regular exercise",
    "Balanced diet",
    "Regular health check-ups",
];

/// Risk tier for stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Low risk of stroke
    Low,
    /// Moderate risk, regular monitoring recommended
    Moderate,
    /// High risk, medical consultation recommended
    High,
}

impl RiskLevel {
    /// Classify a risk score. Thresholds are inclusive lower bounds.
    #[must_use]
    pub fn from_score(score: u32) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            Self::High
        } else if score >= MODERATE_RISK_THRESHOLD {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    /// Fixed recommendations for this tier, in display order.
    #[must_use]
    pub fn recommendations(&self) -> &'static [&'static str; 4] {
        match self {
            Self::Low => &LOW_RISK_RECOMMENDATIONS,
            Self::Moderate => &MODERATE_RISK_RECOMMENDATIONS,
            Self::High => &HIGH_RISK_RECOMMENDATIONS,
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low risk - No significant indicators",
            Self::Moderate => "Moderate risk - Regular check-ups advised",
            Self::High => "High risk - Immediate consultation advised",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Moderate => write!(f, "MODERATE"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Outcome of a single assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    /// Point total in `[0, 80]`
    pub score: u32,

    /// Tier derived from `score`
    pub level: RiskLevel,

    /// Fixed recommendations for `level`
    pub recommendations: Vec<String>,
}
