use std::sync::Arc;

use difteri_client::{HttpBackend, PredictionBackend};
use difteri_server::{AppState, ServerConfig};
use difteri_store::DiagnosisStore;
use eyre::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let config = ServerConfig::from_env()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if config.log_json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    let backend: Arc<dyn PredictionBackend> = Arc::new(HttpBackend::new(&config.api_url));
    let store = Arc::new(DiagnosisStore::open(&config.data_dir));

    // Hydrate in the background; /result answers 503 until this finishes.
    let hydrating = Arc::clone(&store);
    tokio::task::spawn_blocking(move || {
        if let Err(e) = hydrating.hydrate() {
            tracing::warn!(error = %e, "failed to load stored diagnosis, starting empty");
        }
    });

    let state = AppState::new(backend, store);

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(
        addr = %config.bind,
        api_url = %config.api_url,
        data_dir = %config.data_dir.display(),
        "intake server listening"
    );

    axum::serve(listener, difteri_server::app(state)).await?;
    Ok(())
}
