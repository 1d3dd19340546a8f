//! Additive stroke risk scoring.
//!
//! Each factor contributes a fixed number of points, independently of the
//! others. The factor table is checked at compile time so that the total can
//! never leave `[0, MAX_SCORE]`.

use serde::{Deserialize, Serialize};

use super::assessment::{RiskAssessment, RiskLevel};
use super::patient::PatientProfile;

/// Upper bound of the risk score.
pub const MAX_SCORE: u32 = 80;

const AGE_THRESHOLD_YEARS: i32 = 65;
const BMI_THRESHOLD: f64 = 30.0;
const GLUCOSE_THRESHOLD_MG_DL: f64 = 126.0;

/// A scored stroke risk factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskFactor {
    /// Age above 65
    AdvancedAge,
    Hypertension,
    HeartDisease,
    /// BMI above 30
    Obesity,
    /// Glucose above 126 mg/dL
    ElevatedGlucose,
    Smoking,
}

impl RiskFactor {
    /// All factors, in scoring order.
    pub const ALL: [RiskFactor; 6] = [
        Self::AdvancedAge,
        Self::Hypertension,
        Self::HeartDisease,
        Self::Obesity,
        Self::ElevatedGlucose,
        Self::Smoking,
    ];

    /// Points contributed when the factor is present.
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::AdvancedAge => 20,
            Self::Hypertension | Self::HeartDisease => 15,
            Self::Obesity | Self::ElevatedGlucose | Self::Smoking => 10,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AdvancedAge => "Age over 65",
            Self::Hypertension => "Hypertension",
            Self::HeartDisease => "Heart disease",
            Self::Obesity => "BMI over 30",
            Self::ElevatedGlucose => "Glucose over 126 mg/dL",
            Self::Smoking => "Smoking",
        }
    }

    /// Whether the factor holds for `profile`.
    ///
    /// Missing numeric attributes never satisfy a threshold.
    #[must_use]
    pub fn is_present(self, profile: &PatientProfile) -> bool {
        match self {
            Self::AdvancedAge => profile.age_exceeds(AGE_THRESHOLD_YEARS),
            Self::Hypertension => profile.hypertension,
            Self::HeartDisease => profile.heart_disease,
            Self::Obesity => profile.bmi_exceeds(BMI_THRESHOLD),
            Self::ElevatedGlucose => profile.glucose_exceeds(GLUCOSE_THRESHOLD_MG_DL),
            Self::Smoking => profile.smoking_status,
        }
    }
}

const fn total_points() -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i < RiskFactor::ALL.len() {
        total += RiskFactor::ALL[i].points();
        i += 1;
    }
    total
}

const _: () = assert!(
    total_points() <= MAX_SCORE,
    "risk factor points exceed MAX_SCORE"
);

/// Stateless stroke risk assessor.
///
/// Every function is pure: identical input yields identical output.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskAssessor;

impl RiskAssessor {
    /// Sum the points of every present factor.
    #[must_use]
    pub fn compute_score(profile: &PatientProfile) -> u32 {
        RiskFactor::ALL
            .iter()
            .filter(|factor| factor.is_present(profile))
            .map(|factor| factor.points())
            .sum()
    }

    /// Map a score to its risk tier.
    #[must_use]
    pub fn classify(score: u32) -> RiskLevel {
        RiskLevel::from_score(score)
    }

    /// Fixed recommendations for a tier.
    #[must_use]
    pub fn recommend(level: RiskLevel) -> Vec<String> {
        level
            .recommendations()
            .iter()
            .map(|r| (*r).to_string())
            .collect()
    }

    /// Score, classify and recommend in one pass.
    #[must_use]
    pub fn assess(profile: &PatientProfile) -> RiskAssessment {
        let score = Self::compute_score(profile);
        let level = Self::classify(score);
        RiskAssessment {
            score,
            level,
            recommendations: Self::recommend(level),
        }
    }

    /// Factors that contributed to the score, in scoring order.
    #[must_use]
    pub fn contributing_factors(profile: &PatientProfile) -> Vec<RiskFactor> {
        RiskFactor::ALL
            .into_iter()
            .filter(|factor| factor.is_present(profile))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Gender;

    fn baseline() -> PatientProfile {
        PatientProfile::new(40, Gender::Male, false, false, 22.0, 90.0, false)
    }

    #[test]
    fn test_baseline_is_low() {
        let assessment = RiskAssessor::assess(&baseline());
        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.level, RiskLevel::Low);
        assert_eq!(
            assessment.recommendations,
            vec![
                "Maintain a healthy lifestyle",
                "Regular exercise",
                "Balanced diet",
                "Regular health check-ups",
            ]
        );
    }

    #[test]
    fn test_at_thresholds_scores_zero() {
        let profile = PatientProfile::new(65, Gender::Female, false, false, 30.0, 126.0, false);
        assert_eq!(RiskAssessor::compute_score(&profile), 0);
    }

    #[test]
    fn test_elderly_hypertensive_is_moderate() {
        let profile = PatientProfile::new(70, Gender::Male, true, false, 25.0, 100.0, false);
        let assessment = RiskAssessor::assess(&profile);

        assert_eq!(assessment.score, 35);
        assert_eq!(assessment.level, RiskLevel::Moderate);
        assert_eq!(
            assessment.recommendations,
            vec![
                "Schedule regular check-ups",
                "Maintain a healthy diet",
                "Exercise regularly",
                "Monitor vital signs",
            ]
        );
    }

    #[test]
    fn test_boolean_factors_only_is_moderate() {
        let profile = PatientProfile {
            hypertension: true,
            heart_disease: true,
            smoking_status: true,
            ..baseline()
        };
        let assessment = RiskAssessor::assess(&profile);
        assert_eq!(assessment.score, 40);
        assert_eq!(assessment.level, RiskLevel::Moderate);
    }

    #[test]
    fn test_all_factors_is_max_high() {
        let profile = PatientProfile::new(70, Gender::Male, true, true, 35.0, 150.0, true);
        let assessment = RiskAssessor::assess(&profile);

        assert_eq!(assessment.score, MAX_SCORE);
        assert_eq!(assessment.level, RiskLevel::High);
        assert_eq!(
            assessment.recommendations,
            vec![
                "Seek immediate medical consultation",
                "Monitor blood pressure regularly",
                "Take prescribed medications consistently",
                "Make lifestyle changes immediately",
            ]
        );
    }

    #[test]
    fn test_each_factor_scores_independently() {
        let cases = [
            (PatientProfile { age: Some(66), ..baseline() }, 20),
            (PatientProfile { hypertension: true, ..baseline() }, 15),
            (PatientProfile { heart_disease: true, ..baseline() }, 15),
            (PatientProfile { bmi: Some(31.0), ..baseline() }, 10),
            (PatientProfile { glucose_level: Some(127.0), ..baseline() }, 10),
            (PatientProfile { smoking_status: true, ..baseline() }, 10),
        ];
        for (profile, expected) in cases {
            assert_eq!(RiskAssessor::compute_score(&profile), expected, "{profile:?}");
        }
    }

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(RiskAssessor::classify(50), RiskLevel::High);
        assert_eq!(RiskAssessor::classify(49), RiskLevel::Moderate);
        assert_eq!(RiskAssessor::classify(30), RiskLevel::Moderate);
        assert_eq!(RiskAssessor::classify(29), RiskLevel::Low);
    }

    #[test]
    fn test_reachable_scores_cross_boundaries() {
        // age + hypertension + heart disease = 50
        let fifty = PatientProfile {
            age: Some(80),
            hypertension: true,
            heart_disease: true,
            ..baseline()
        };
        assert_eq!(RiskAssessor::assess(&fifty).level, RiskLevel::High);

        // hypertension + smoking = 25
        let twenty_five = PatientProfile {
            hypertension: true,
            smoking_status: true,
            ..baseline()
        };
        assert_eq!(RiskAssessor::assess(&twenty_five).level, RiskLevel::Low);

        // age + obesity = 30
        let thirty = PatientProfile {
            age: Some(66),
            bmi: Some(32.5),
            ..baseline()
        };
        assert_eq!(RiskAssessor::assess(&thirty).level, RiskLevel::Moderate);
    }

    #[test]
    fn test_missing_numbers_fail_thresholds() {
        let profile = PatientProfile {
            age: None,
            bmi: None,
            glucose_level: None,
            hypertension: true,
            ..baseline()
        };
        let assessment = RiskAssessor::assess(&profile);
        assert_eq!(assessment.score, 15);
        assert!(RiskAssessor::contributing_factors(&profile)
            .iter()
            .all(|f| *f == RiskFactor::Hypertension));
    }

    #[test]
    fn test_negative_values_are_not_rejected() {
        let profile = PatientProfile::new(-5, Gender::Male, false, false, -1.0, -10.0, true);
        let assessment = RiskAssessor::assess(&profile);
        assert_eq!(assessment.score, 10);
        assert_eq!(assessment.level, RiskLevel::Low);
    }

    #[test]
    fn test_assess_is_idempotent() {
        let profile = PatientProfile::new(68, Gender::Female, true, false, 33.0, 140.0, false);
        let first = RiskAssessor::assess(&profile);
        let second = RiskAssessor::assess(&profile);
        assert_eq!(first, second);
    }

    #[test]
    fn test_recommendations_always_four() {
        for score in 0..=MAX_SCORE {
            let level = RiskAssessor::classify(score);
            assert_eq!(RiskAssessor::recommend(level).len(), 4);
        }
    }

    #[test]
    fn test_contributing_factors_sum_to_score() {
        let profile = PatientProfile::new(72, Gender::Male, false, true, 31.0, 110.0, true);
        let factors = RiskAssessor::contributing_factors(&profile);
        let total: u32 = factors.iter().map(|f| f.points()).sum();

        assert_eq!(
            factors,
            vec![
                RiskFactor::AdvancedAge,
                RiskFactor::HeartDisease,
                RiskFactor::Obesity,
                RiskFactor::Smoking,
            ]
        );
        assert_eq!(total, RiskAssessor::compute_score(&profile));
    }

    #[test]
    fn test_factor_table_fits_max_score() {
        assert_eq!(total_points(), MAX_SCORE);
    }
}
