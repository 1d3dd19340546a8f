//! Assessment service: runs the risk assessor for a caller.
//!
//! The service never changes the computed result. It only:
//! - logs the outcome (scores and factor labels, never attribute values)
//! - holds the result back for the configured presentation latency

use std::time::Duration;

use crate::config::Config;
use crate::domain::{PatientProfile, RiskAssessment, RiskAssessor, RiskFactor};

/// Service for running stroke risk assessments.
#[derive(Debug, Clone, Default)]
pub struct AssessmentService {
    simulated_latency: Duration,
}

impl AssessmentService {
    /// Create a service that releases results after `simulated_latency`.
    #[must_use]
    pub fn new(simulated_latency: Duration) -> Self {
        Self { simulated_latency }
    }

    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.simulated_latency)
    }

    #[must_use]
    pub fn simulated_latency(&self) -> Duration {
        self.simulated_latency
    }

    /// Assess a patient profile.
    ///
    /// Blocks for the configured latency before returning.
    #[must_use]
    pub fn assess(&self, profile: &PatientProfile) -> RiskAssessment {
        let factors = RiskAssessor::contributing_factors(profile);
        tracing::debug!(
            "Contributing factors: [{}]",
            factors
                .iter()
                .map(|f| f.label())
                .collect::<Vec<_>>()
                .join(", ")
        );

        let assessment = RiskAssessor::assess(profile);
        debug_assert_eq!(
            assessment.score,
            factors.iter().copied().map(RiskFactor::points).sum::<u32>()
        );

        if !self.simulated_latency.is_zero() {
            tracing::debug!("Holding result for {:?}", self.simulated_latency);
            std::thread::sleep(self.simulated_latency);
        }

        tracing::info!(
            "Assessment complete: score={}, risk={}, factors={}",
            assessment.score,
            assessment.level,
            factors.len()
        );

        assessment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gender, RiskLevel};
    use std::time::Instant;

    #[test]
    fn test_matches_pure_assessor() {
        let service = AssessmentService::default();
        let profile = PatientProfile::new(70, Gender::Male, true, false, 25.0, 100.0, false);

        assert_eq!(service.assess(&profile), RiskAssessor::assess(&profile));
    }

    #[test]
    fn test_latency_does_not_change_result() {
        let service = AssessmentService::new(Duration::from_millis(20));
        let profile = PatientProfile::new(70, Gender::Female, true, true, 35.0, 150.0, true);

        let started = Instant::now();
        let assessment = service.assess(&profile);

        assert!(started.elapsed() >= Duration::from_millis(20));
        assert_eq!(assessment.score, 80);
        assert_eq!(assessment.level, RiskLevel::High);
    }

    #[test]
    fn test_from_config() {
        let config = Config {
            simulated_latency: Duration::from_millis(1500),
            ..Config::default()
        };
        let service = AssessmentService::from_config(&config);
        assert_eq!(service.simulated_latency(), Duration::from_millis(1500));
    }
}
