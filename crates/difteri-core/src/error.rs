use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown wizard step: {0}")]
    UnknownStep(String),
}
