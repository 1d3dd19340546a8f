//! Background assessment worker.
//!
//! Runs an assessment on its own thread so a presentation layer can keep
//! drawing while the service holds the result for its configured latency.

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use super::AssessmentService;
use crate::domain::{PatientProfile, RiskAssessment};
use crate::StrokesenseError;

/// Progress updates from the assessment worker.
#[derive(Debug, Clone, PartialEq)]
pub enum AssessmentProgress {
    /// Assessment started
    Processing,
    /// Assessment finished
    Complete(RiskAssessment),
}

/// Handle to a running assessment worker.
pub struct AssessmentWorkerHandle {
    progress_rx: Receiver<AssessmentProgress>,
    _handle: JoinHandle<()>,
}

impl AssessmentWorkerHandle {
    /// Try to receive the next progress update (non-blocking).
    #[must_use]
    pub fn try_recv(&self) -> Option<AssessmentProgress> {
        self.progress_rx.try_recv().ok()
    }

    /// Block until the assessment completes.
    ///
    /// `on_progress` sees every intermediate update.
    ///
    /// # Errors
    /// Returns `StrokesenseError::WorkerDisconnected` if the worker exits
    /// without a result.
    pub fn wait_with<P>(self, mut on_progress: P) -> Result<RiskAssessment, StrokesenseError>
    where
        P: FnMut(&AssessmentProgress),
    {
        loop {
            match self.progress_rx.recv() {
                Ok(AssessmentProgress::Complete(assessment)) => return Ok(assessment),
                Ok(progress) => on_progress(&progress),
                Err(_) => return Err(StrokesenseError::WorkerDisconnected),
            }
        }
    }

    /// Block until the assessment completes.
    ///
    /// # Errors
    /// Returns `StrokesenseError::WorkerDisconnected` if the worker exits
    /// without a result.
    pub fn wait(self) -> Result<RiskAssessment, StrokesenseError> {
        self.wait_with(|_| {})
    }
}

/// Worker that runs one assessment in the background.
pub struct AssessmentWorker;

impl AssessmentWorker {
    /// Spawn a background assessment.
    ///
    /// Returns a handle to receive progress updates.
    pub fn spawn(service: Arc<AssessmentService>, profile: PatientProfile) -> AssessmentWorkerHandle {
        let (tx, rx) = mpsc::channel();

        let handle = thread::spawn(move || Self::run(&service, &profile, &tx));

        AssessmentWorkerHandle {
            progress_rx: rx,
            _handle: handle,
        }
    }

    fn run(service: &AssessmentService, profile: &PatientProfile, tx: &Sender<AssessmentProgress>) {
        // Send errors mean the handle was dropped; nobody is listening.
        let _ = tx.send(AssessmentProgress::Processing);
        let assessment = service.assess(profile);
        let _ = tx.send(AssessmentProgress::Complete(assessment));
    }
}
