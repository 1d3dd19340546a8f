//! Patient attribute types for stroke risk scoring.

use serde::{Deserialize, Serialize};

/// Patient gender as recorded on intake.
///
/// Informational only: scoring never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

/// Attributes consumed by the risk assessor.
///
/// Numeric attributes are `None` when the caller could not supply a valid
/// number. An absent value never satisfies its threshold.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientProfile {
    /// Age in whole years
    pub age: Option<i32>,

    pub gender: Gender,

    /// Diagnosed hypertension
    pub hypertension: bool,

    /// Diagnosed heart disease
    pub heart_disease: bool,

    /// Body mass index (kg/m²)
    pub bmi: Option<f64>,

    /// Fasting glucose in mg/dL
    pub glucose_level: Option<f64>,

    /// Current smoker
    pub smoking_status: bool,
}

impl PatientProfile {
    /// Profile with every numeric attribute supplied.
    #[must_use]
    pub fn new(
        age: i32,
        gender: Gender,
        hypertension: bool,
        heart_disease: bool,
        bmi: f64,
        glucose_level: f64,
        smoking_status: bool,
    ) -> Self {
        Self {
            age: Some(age),
            gender,
            hypertension,
            heart_disease,
            bmi: Some(bmi).filter(|v| v.is_finite()),
            glucose_level: Some(glucose_level).filter(|v| v.is_finite()),
            smoking_status,
        }
    }

    /// True when age is known and strictly above `threshold`.
    #[must_use]
    pub fn age_exceeds(&self, threshold: i32) -> bool {
        self.age.is_some_and(|age| age > threshold)
    }

    /// True when BMI is known and strictly above `threshold`.
    #[must_use]
    pub fn bmi_exceeds(&self, threshold: f64) -> bool {
        self.bmi.is_some_and(|bmi| bmi > threshold)
    }

    /// True when glucose is known and strictly above `threshold`.
    #[must_use]
    pub fn glucose_exceeds(&self, threshold: f64) -> bool {
        self.glucose_level.is_some_and(|glucose| glucose > threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_values_never_exceed() {
        let profile = PatientProfile::default();
        assert!(!profile.age_exceeds(65));
        assert!(!profile.bmi_exceeds(30.0));
        assert!(!profile.glucose_exceeds(126.0));
        assert_eq!(profile.gender, Gender::Male);
    }

    #[test]
    fn test_thresholds_are_strict() {
        let at_threshold = PatientProfile::new(65, Gender::Female, false, false, 30.0, 126.0, false);
        assert!(!at_threshold.age_exceeds(65));
        assert!(!at_threshold.bmi_exceeds(30.0));
        assert!(!at_threshold.glucose_exceeds(126.0));

        let above = PatientProfile::new(66, Gender::Female, false, false, 30.1, 126.5, false);
        assert!(above.age_exceeds(65));
        assert!(above.bmi_exceeds(30.0));
        assert!(above.glucose_exceeds(126.0));
    }

    #[test]
    fn test_non_finite_numbers_are_dropped() {
        let profile = PatientProfile::new(40, Gender::Male, false, false, f64::NAN, f64::INFINITY, false);
        assert!(profile.bmi.is_none());
        assert!(profile.glucose_level.is_none());
        assert!(!profile.glucose_exceeds(126.0));
    }

    #[test]
    fn test_serde_field_names() {
        let profile = PatientProfile::new(70, Gender::Female, true, false, 25.0, 100.0, true);
        let json = serde_json::to_value(&profile).expect("Should serialize");
        assert_eq!(json["heartDisease"], false);
        assert_eq!(json["glucoseLevel"], 100.0);
        assert_eq!(json["smokingStatus"], true);
        assert_eq!(json["gender"], "female");
    }
}
