use difteri_core::models::diagnosis::DiagnosisResult;

use crate::error::ClientError;
use crate::wire::{Capabilities, PredictRequest};

/// The prediction service, as seen by the submission.
///
/// Calls are blocking and made one at a time; no timeout or retry is
/// layered on top of the transport.
pub trait PredictionBackend: Send + Sync {
    /// Query the capability endpoint for the features the model compares.
    fn health(&self) -> Result<Capabilities, ClientError>;

    /// Post a merged intake record for prediction.
    fn predict(&self, request: &PredictRequest) -> Result<DiagnosisResult, ClientError>;
}
