use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use difteri_forms::RawInput;
use difteri_wizard::{SubmissionOutcome, WizardView};
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Toast shown after a reset.
const RESET_MESSAGE: &str = "Formulir berhasil direset!";

#[derive(Serialize)]
pub struct ResetResponse {
    pub message: &'static str,
    pub wizard: WizardView,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    pub redirect: String,
    pub submission_id: Uuid,
    pub diagnosis: String,
}

/// An empty body means "no edits".
fn edits_from(body: &[u8]) -> Result<RawInput, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(RawInput::new());
    }
    let value: serde_json::Value = serde_json::from_slice(body)?;
    Ok(difteri_forms::as_edits(value)?)
}

pub async fn get_wizard(State(state): State<AppState>) -> Json<WizardView> {
    Json(state.session.lock().await.view())
}

pub async fn edit_fields(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<WizardView>, ApiError> {
    let edits = edits_from(&body)?;
    let mut session = state.session.lock().await;
    session.edit(&edits)?;
    Ok(Json(session.view()))
}

pub async fn next_step(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<WizardView>, ApiError> {
    let edits = edits_from(&body)?;
    let mut session = state.session.lock().await;
    session.advance(&edits)?;
    Ok(Json(session.view()))
}

pub async fn prev_step(State(state): State<AppState>) -> Json<WizardView> {
    let mut session = state.session.lock().await;
    session.back();
    Json(session.view())
}

pub async fn reset(State(state): State<AppState>) -> Json<ResetResponse> {
    let mut session = state.session.lock().await;
    session.reset();
    Json(ResetResponse {
        message: RESET_MESSAGE,
        wizard: session.view(),
    })
}

/// Validate the final step, then run the submission without holding the
/// session lock so the wizard keeps reporting `loading` meanwhile.
/// The work runs on its own task so a dropped request still clears
/// `loading`.
pub async fn submit(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SubmitResponse>, ApiError> {
    let edits = edits_from(&body)?;
    let outcome = tokio::spawn(run_submission(state, edits)).await??;
    Ok(Json(SubmitResponse {
        redirect: outcome.redirect,
        submission_id: outcome.submission_id,
        diagnosis: outcome.diagnosis,
    }))
}

async fn run_submission(state: AppState, edits: RawInput) -> Result<SubmissionOutcome, ApiError> {
    let submission = state.session.lock().await.begin_submission(&edits)?;

    let backend = Arc::clone(&state.backend);
    let store = Arc::clone(&state.store);
    let joined = tokio::task::spawn_blocking(move || {
        submission.run(backend.as_ref(), &store, &mut rand::thread_rng())
    })
    .await;

    state.session.lock().await.finish_submission();
    Ok(joined??)
}
