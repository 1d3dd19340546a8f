//! JSON intake and report adapter.
//!
//! Converts the loosely-typed intake record into a `PatientProfile` and writes
//! the assessment report. Numeric fields may arrive as JSON numbers, as text, or
//! not at all; anything that does not yield a finite number becomes "absent",
//! which never satisfies a scoring threshold.

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};

use crate::domain::{Gender, PatientProfile, RiskAssessment, RiskAssessor};
use crate::{Result, StrokesenseError};

/// A numeric intake field as typed by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Text(String),
    /// Any other JSON value (bool, array, object). Never a number.
    Other(serde_json::Value),
}

impl NumericInput {
    /// Whole years. Text keeps its leading integer ("70.9" is 70).
    #[must_use]
    pub fn as_whole_number(&self) -> Option<i32> {
        match self {
            Self::Number(v) if v.is_finite() => Some(v.trunc() as i32),
            Self::Number(_) => None,
            Self::Text(text) => parse_leading_int(text),
            Self::Other(_) => None,
        }
    }

    #[must_use]
    pub fn as_real(&self) -> Option<f64> {
        let value = match self {
            Self::Number(v) => Some(*v),
            Self::Text(text) => text.trim().parse::<f64>().ok(),
            Self::Other(_) => None,
        };
        value.filter(|v| v.is_finite())
    }
}

/// Leading integer of `text`, ignoring surrounding whitespace and any trailing
/// non-digit characters. Saturates at the `i32` range.
fn parse_leading_int(text: &str) -> Option<i32> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut seen_digit = false;
    let mut value: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        value = value.saturating_mul(10).saturating_add(i64::from(b - b'0'));
    }
    if !seen_digit {
        return None;
    }

    let signed = if negative { -value } else { value };
    Some(signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

/// Raw intake record, as submitted by a form or script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientForm {
    pub age: Option<NumericInput>,
    pub gender: Gender,
    pub hypertension: bool,
    pub heart_disease: bool,
    pub bmi: Option<NumericInput>,
    pub glucose_level: Option<NumericInput>,
    pub smoking_status: bool,
}

impl PatientForm {
    /// Convert to a typed profile. Never fails on numeric content.
    #[must_use]
    pub fn to_profile(&self) -> PatientProfile {
        PatientProfile {
            age: self.age.as_ref().and_then(NumericInput::as_whole_number),
            gender: self.gender,
            hypertension: self.hypertension,
            heart_disease: self.heart_disease,
            bmi: self.bmi.as_ref().and_then(NumericInput::as_real),
            glucose_level: self.glucose_level.as_ref().and_then(NumericInput::as_real),
            smoking_status: self.smoking_status,
        }
    }
}

/// Serialized result handed back to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    #[serde(flatten)]
    pub assessment: RiskAssessment,
    pub summary: &'static str,
    pub contributing_factors: Vec<&'static str>,
}

impl AssessmentReport {
    #[must_use]
    pub fn new(profile: &PatientProfile, assessment: RiskAssessment) -> Self {
        Self {
            summary: assessment.level.description(),
            contributing_factors: RiskAssessor::contributing_factors(profile)
                .into_iter()
                .map(|factor| factor.label())
                .collect(),
            assessment,
        }
    }
}

/// Decode a `PatientForm` from JSON.
///
/// # Errors
/// Returns `StrokesenseError::Input` if the document is not a patient form.
pub fn read_patient_form<R: Read>(reader: R) -> Result<PatientForm> {
    serde_json::from_reader(reader).map_err(|e| StrokesenseError::Input(e.to_string()))
}

/// Write a report as pretty-printed JSON followed by a newline.
///
/// # Errors
/// Returns error if serialization or the write fails.
pub fn write_report<W: Write>(mut writer: W, report: &AssessmentReport) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
