use difteri_client::ClientError;
use difteri_core::models::step::StepId;
use difteri_forms::error::FormError;
use difteri_store::StoreError;
use thiserror::Error;

use crate::submit::{CAPABILITY_FAILURE, GENERIC_FAILURE};

#[derive(Debug, Error)]
pub enum WizardError {
    #[error("output of step {got} cannot complete step {expected}")]
    StepMismatch { expected: StepId, got: StepId },

    #[error("step {0} is not the final step")]
    NotFinalStep(StepId),

    #[error("a submission is already in flight")]
    Busy,

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// Failure of one submission attempt. None of these are retried.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("capability check failed: {0}")]
    Capability(#[source] ClientError),

    /// The backend refused the record (HTTP 422).
    #[error("backend rejected the record: {0}")]
    Rejected(String),

    #[error("prediction failed: {0}")]
    Failed(#[source] ClientError),

    #[error("failed to build the intake record: {0}")]
    Record(#[from] serde_json::Error),

    #[error("failed to persist the diagnosis: {0}")]
    Store(#[from] StoreError),
}

impl SubmissionError {
    /// Message shown to the user for this failure.
    pub fn user_message(&self) -> &str {
        match self {
            SubmissionError::Capability(_) => CAPABILITY_FAILURE,
            SubmissionError::Rejected(msg) => msg,
            SubmissionError::Failed(_) | SubmissionError::Record(_) | SubmissionError::Store(_) => {
                GENERIC_FAILURE
            }
        }
    }
}
