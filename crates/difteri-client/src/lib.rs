//! difteri-client
//!
//! Client for the external prediction service: the capability endpoint
//! (`GET /health`) and the prediction endpoint (`POST /predict`).

pub mod backend;
pub mod error;
pub mod http;
pub mod wire;

pub use backend::PredictionBackend;
pub use error::ClientError;
pub use http::HttpBackend;
