use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("backend returned HTTP {status}")]
    Status { status: u16, body: String },

    /// HTTP 422 from `/predict`, with the first validation message if the
    /// body carried one.
    #[error("backend rejected the record: {}", .0.as_deref().unwrap_or("no detail"))]
    Rejected(Option<String>),

    #[error("backend reported status '{0}'")]
    Unavailable(String),

    #[error("response parsing failed: {0}")]
    ResponseParse(String),
}
