//! Adapters layer: Conversions at the edge of the application.
//!
//! - `intake`: JSON patient form decoding and report encoding
//! - `sanitize`: identifier redaction for logs

pub mod intake;
pub mod sanitize;

pub use intake::{read_patient_form, write_report, AssessmentReport, NumericInput, PatientForm};
