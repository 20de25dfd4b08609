use difteri_core::models::diagnosis::DiagnosisResult;
use tracing::{debug, warn};

use crate::backend::PredictionBackend;
use crate::error::ClientError;
use crate::wire::{self, Capabilities, PredictRequest};

/// HTTP status the backend uses for field-level rejections.
const UNPROCESSABLE: u16 = 422;

/// Prediction service reached over HTTP.
pub struct HttpBackend {
    base_url: String,
    agent: ureq::Agent,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Self {
        // Non-2xx responses are inspected by status, not turned into errors.
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn transport(url: &str, err: ureq::Error) -> ClientError {
        ClientError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

impl PredictionBackend for HttpBackend {
    fn health(&self) -> Result<Capabilities, ClientError> {
        let url = self.url("/health");
        let mut response = self
            .agent
            .get(&url)
            .header("Content-Type", "application/json")
            .call()
            .map_err(|e| Self::transport(&url, e))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| Self::transport(&url, e))?;

        if !response.status().is_success() {
            warn!(status, "capability endpoint returned an error");
            return Err(ClientError::Status { status, body });
        }

        let capabilities = wire::parse_health(&body)?;
        debug!(features = capabilities.features.len(), "fetched backend capabilities");
        Ok(capabilities)
    }

    fn predict(&self, request: &PredictRequest) -> Result<DiagnosisResult, ClientError> {
        let url = self.url("/predict");
        let mut response = self
            .agent
            .post(&url)
            .send_json(request)
            .map_err(|e| Self::transport(&url, e))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| Self::transport(&url, e))?;

        if status == UNPROCESSABLE {
            return Err(ClientError::Rejected(wire::rejection_message(&body)));
        }
        if !response.status().is_success() {
            warn!(status, "prediction endpoint returned an error");
            return Err(ClientError::Status { status, body });
        }

        serde_json::from_str(&body).map_err(|e| ClientError::ResponseParse(e.to_string()))
    }
}
