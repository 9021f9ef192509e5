use keywordsai_core::error::NodeError;
use reqwest::StatusCode;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum KeywordsAiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t decode body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Keywords AI returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("event stream is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

impl KeywordsAiError {
    /// HTTP status of a non-success response, if that is what failed.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            KeywordsAiError::Api { status, .. } => Some(*status),
            KeywordsAiError::Http(err) => err.status(),
            KeywordsAiError::Serde(_) | KeywordsAiError::Utf8(_) => None,
        }
    }
}

impl From<KeywordsAiError> for NodeError {
    fn from(value: KeywordsAiError) -> Self {
        NodeError::Backend(Box::new(value))
    }
}
