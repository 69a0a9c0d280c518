use thiserror::Error;

/// Errors raised while turning raw input into a validated record.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("Malformed record JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid record field '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl RecordError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        RecordError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
