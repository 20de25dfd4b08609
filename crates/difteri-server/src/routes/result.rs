use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use difteri_result::ResultView;
use difteri_result::view::has_diagnosis;
use difteri_store::Lookup;
use serde::Serialize;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Where the result view sends the user when there is nothing to show.
const WIZARD_PATH: &str = "/wizard";

#[derive(Serialize)]
pub struct ResultResponse {
    pub submission_id: Uuid,
    pub saved_at: String,
    #[serde(flatten)]
    pub view: ResultView,
}

pub async fn get_result(State(state): State<AppState>) -> Result<Response, ApiError> {
    match state.store.lookup() {
        Lookup::NotHydrated => Err(ApiError::Unavailable(
            "diagnosis storage is still loading".to_string(),
        )),
        Lookup::Present(stored) if has_diagnosis(&stored.result) => Ok(Json(ResultResponse {
            submission_id: stored.submission_id,
            saved_at: stored.saved_at.to_string(),
            view: ResultView::new(&stored.result),
        })
        .into_response()),
        Lookup::Present(_) | Lookup::Empty => Ok(Redirect::to(WIZARD_PATH).into_response()),
    }
}

pub async fn clear_result(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state.store.clear()?;
    Ok(StatusCode::NO_CONTENT)
}
