use difteri_core::models::step::StepId;
use thiserror::Error;

use crate::rules::ValidationErrors;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown field '{field}' for step {step}")]
    UnknownField { step: StepId, field: String },

    #[error("field edits must be a JSON object")]
    NotAnObject,

    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}
