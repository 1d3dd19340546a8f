//! Application layer: Use cases around the risk assessor.
//!
//! Adds logging and the optional presentation latency on top of the pure
//! domain rules, and runs assessments off the caller's thread.

mod assessment;
mod worker;

pub use assessment::AssessmentService;
pub use worker::{AssessmentProgress, AssessmentWorker, AssessmentWorkerHandle};
