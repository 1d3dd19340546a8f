//! # Strokesense
//!
//! Heuristic stroke risk assessment.
//!
//! A patient profile is scored with a fixed additive point table, the score is
//! mapped to a risk tier, and the tier selects a fixed list of recommendations.
//!
//! ## Architecture
//!
//! - `domain`: Patient profile, risk tiers and the pure scoring rules
//! - `application`: Assessment service and background worker
//! - `adapters`: JSON intake/report conversion and log sanitization
//! - `config`: Environment-driven runtime settings

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;

pub use domain::{Gender, PatientProfile, RiskAssessment, RiskAssessor, RiskFactor, RiskLevel};

/// Result type for Strokesense operations
pub type Result<T> = std::result::Result<T, StrokesenseError>;

/// Main error type for Strokesense
#[derive(Debug, thiserror::Error)]
pub enum StrokesenseError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid patient input: {0}")]
    Input(String),

    #[error("Assessment worker stopped before producing a result")]
    WorkerDisconnected,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
