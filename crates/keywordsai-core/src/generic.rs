//! Chat message and role types sent on direct gateway calls.
//!
//! The gateway accepts the usual OpenAI-style conversation. The node only
//! ever produces three roles: one leading *system* message followed by the
//! *user* / *assistant* turns the workflow author declared.
use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single chat message in the order it is sent to the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConversationMessage {
    pub role: Role,
    pub content: String,
}

impl ConversationMessage {
    /// Convenience constructor mirroring the field order used by the wire
    /// format (`role`, then `content`).
    ///
    /// ```rust
    /// use keywordsai_core::generic::{ConversationMessage, Role};
    ///
    /// let sys = ConversationMessage::new(Role::System, "You are a helpful assistant.");
    /// assert_eq!(sys.role, Role::System);
    /// ```
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }
}

/// Chat roles understood by the gateway.
///
/// The `Display` implementation renders the canonical lowercase name, the
/// same string that ends up in the JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Defines global behaviour; always the first message of a gateway call.
    System,
    /// Messages originating from the human user.
    #[default]
    User,
    /// Earlier answers of the model, replayed as conversation history.
    Assistant,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::System => write!(f, "system"),
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}
