//! Domain layer: Core business types and scoring rules.
//!
//! Everything here is pure: no I/O, no clocks, no shared state.

mod assessment;
mod patient;
mod scoring;

pub use assessment::{RiskAssessment, RiskLevel, HIGH_RISK_THRESHOLD, MODERATE_RISK_THRESHOLD};
pub use patient::{Gender, PatientProfile};
pub use scoring::{RiskAssessor, RiskFactor, MAX_SCORE};
