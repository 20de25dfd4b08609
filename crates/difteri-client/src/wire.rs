//! Request and response bodies of the prediction service.

use serde::{Deserialize, Serialize};

/// Number of nearest historical cases requested per prediction.
pub const TOP_K: u32 = 3;

/// A flat intake record keyed by wire field names.
pub type IntakeRecord = serde_json::Map<String, serde_json::Value>;

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model_info: ModelInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub features: Vec<String>,
}

/// What the backend advertises it can compare on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub features: Vec<String>,
}

/// Body of `POST /predict`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub data: IntakeRecord,
    pub topk: u32,
    pub similar_fields: Vec<String>,
}

/// Interpret a `/health` body. Anything other than `status: "ok"` is an
/// unavailable backend.
pub fn parse_health(body: &str) -> Result<Capabilities, crate::ClientError> {
    let health: HealthResponse = serde_json::from_str(body)
        .map_err(|e| crate::ClientError::ResponseParse(e.to_string()))?;
    if health.status != "ok" {
        return Err(crate::ClientError::Unavailable(health.status));
    }
    Ok(Capabilities {
        features: health.model_info.features,
    })
}

/// First user-facing message of a 422 body.
///
/// Validation errors arrive as `{ "detail": [{ "msg": ... }, ...] }`; a
/// plain string `detail` is also accepted.
pub fn rejection_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::Array(items) => items
            .first()?
            .get("msg")?
            .as_str()
            .map(str::to_string),
        serde_json::Value::String(s) => Some(s.clone()),
        _ => None,
    }
}
