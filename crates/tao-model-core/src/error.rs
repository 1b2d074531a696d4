use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaoModelError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for TaoModelError {
    fn from(e: serde_json::Error) -> Self {
        TaoModelError::SerializationError(e.to_string())
    }
}
