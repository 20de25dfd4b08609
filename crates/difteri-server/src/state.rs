use std::sync::Arc;

use difteri_client::PredictionBackend;
use difteri_store::DiagnosisStore;
use difteri_wizard::IntakeSession;
use tokio::sync::Mutex;

/// Shared application state, injected into all route handlers via Axum state.
///
/// The server drives a single intake session.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<IntakeSession>>,
    pub store: Arc<DiagnosisStore>,
    pub backend: Arc<dyn PredictionBackend>,
}

impl AppState {
    pub fn new(backend: Arc<dyn PredictionBackend>, store: Arc<DiagnosisStore>) -> Self {
        Self {
            session: Arc::new(Mutex::new(IntakeSession::new())),
            store,
            backend,
        }
    }
}
