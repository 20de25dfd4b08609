use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use difteri_forms::error::FormError;
use difteri_forms::rules::{FieldError, ValidationErrors};
use difteri_wizard::{SubmissionError, WizardError};
use serde::Serialize;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    /// Field validation failed; every field problem is returned.
    Validation(ValidationErrors),
    Conflict(String),
    /// The prediction backend failed; carries the user-facing message.
    Backend(String),
    Unavailable(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    fields: Vec<FieldError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, fields) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, Vec::new()),
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                errors.to_string(),
                errors.errors,
            ),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg, Vec::new()),
            ApiError::Backend(msg) => (StatusCode::BAD_GATEWAY, msg, Vec::new()),
            ApiError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg, Vec::new()),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    Vec::new(),
                )
            }
        };

        (status, Json(ErrorBody { error: message, fields })).into_response()
    }
}

impl From<WizardError> for ApiError {
    fn from(e: WizardError) -> Self {
        match e {
            WizardError::Form(FormError::Validation(errors)) => ApiError::Validation(errors),
            WizardError::Form(other) => ApiError::BadRequest(other.to_string()),
            WizardError::NotFinalStep(_) => ApiError::BadRequest(e.to_string()),
            WizardError::Busy => ApiError::Conflict(e.to_string()),
            WizardError::Submission(inner) => inner.into(),
            WizardError::StepMismatch { .. } => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<SubmissionError> for ApiError {
    fn from(e: SubmissionError) -> Self {
        match e {
            SubmissionError::Record(_) | SubmissionError::Store(_) => {
                ApiError::Internal(e.to_string())
            }
            other => ApiError::Backend(other.user_message().to_string()),
        }
    }
}

impl From<FormError> for ApiError {
    fn from(e: FormError) -> Self {
        WizardError::Form(e).into()
    }
}

impl From<difteri_store::StoreError> for ApiError {
    fn from(e: difteri_store::StoreError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        ApiError::Internal(e.to_string())
    }
}
