//! Unified error type exposed by **`keywordsai-core`**.
//!
//! Backend crates convert their internal errors into one of these variants
//! before bubbling them up to the [`KeywordsAiNode`](crate::KeywordsAiNode).
//! Every variant renders a human readable message because the item processor
//! turns failures into `{"error": "<message>"}` records when the host asks it
//! to continue past failing items.

use serde_json::Value;
use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, NodeError>;

#[derive(Debug, Error)]
pub enum NodeError {
    /// One of the free-text JSON parameters (`overrideParamsJson`,
    /// `metadata`, `customerParams`) could not be parsed.
    #[error("invalid JSON in `{field}`: {source}")]
    InvalidJson {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A JSON parameter parsed fine but is not an object.
    #[error("`{field}` must be a JSON object")]
    NotAnObject { field: &'static str },

    /// Failure while serialising or deserialising JSON payloads sent to /
    /// received from the gateway.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic forwarding of any backend-specific error (HTTP transport,
    /// non-success status, …).
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid: {0}")]
    Invalid(String),
}

/// A batch was aborted because item `index` failed and the host did not ask
/// to continue past failures.
///
/// Outputs produced before the failing item are kept in `completed`.
#[derive(Debug, Error)]
#[error("item {index} failed: {source}")]
pub struct ExecutionError {
    pub index: usize,
    pub completed: Vec<Value>,
    #[source]
    pub source: NodeError,
}
