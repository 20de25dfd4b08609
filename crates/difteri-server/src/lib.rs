//! difteri-server
//!
//! HTTP surface for the browser front-end: the intake wizard, submission
//! and the result view.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use axum::routing::{get, patch, post};
use tower_http::cors::{Any, CorsLayer};

pub use config::ServerConfig;
pub use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Wizard
        .route("/wizard", get(routes::wizard::get_wizard))
        .route("/wizard/fields", patch(routes::wizard::edit_fields))
        .route("/wizard/next", post(routes::wizard::next_step))
        .route("/wizard/prev", post(routes::wizard::prev_step))
        .route("/wizard/reset", post(routes::wizard::reset))
        .route("/wizard/submit", post(routes::wizard::submit))
        // Result
        .route(
            "/result",
            get(routes::result::get_result).delete(routes::result::clear_result),
        )
        .layer(cors)
        .with_state(state)
}
