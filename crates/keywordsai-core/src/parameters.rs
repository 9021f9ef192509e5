//! Parameter bag the host resolves for every input item.
//!
//! Field names follow the host's parameter names (`systemMessage`,
//! `promptId`, `additionalFields`, …) so a bag can be deserialised straight
//! from the JSON the host hands over. Defaults match what the host shows in
//! the editor when a field was never touched.
use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::generic::Role;
use crate::options::LATEST_VERSION;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_SYSTEM_MESSAGE: &str = "You are a helpful assistant.";

/// Which request shape an item produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub enum Resource {
    /// Direct call with an explicit model and message history.
    #[serde(rename = "gateway")]
    Gateway,
    /// Call through a managed prompt stored on Keywords AI.
    #[default]
    #[serde(rename = "gatewayPrompt")]
    GatewayPrompt,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct NodeParameters {
    #[serde(default)]
    pub resource: Resource,

    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_system_message")]
    pub system_message: String,
    #[serde(default)]
    pub messages: MessageCollection,

    #[serde(default)]
    pub prompt_id: String,
    #[serde(default)]
    pub version: Option<VersionSelector>,
    #[serde(default)]
    pub variables: VariableCollection,
    #[serde(default, rename = "override")]
    pub override_config: bool,

    #[serde(default)]
    pub additional_fields: AdditionalFields,
}

impl NodeParameters {
    /// A direct gateway call with the editor defaults for everything else.
    pub fn gateway(model: impl Into<String>) -> Self {
        Self {
            resource: Resource::Gateway,
            model: model.into(),
            ..Self::default()
        }
    }

    /// A managed-prompt call with the editor defaults for everything else.
    pub fn prompt(prompt_id: impl Into<String>) -> Self {
        Self {
            resource: Resource::GatewayPrompt,
            prompt_id: prompt_id.into(),
            ..Self::default()
        }
    }

    pub fn with_system_message(mut self, system_message: impl Into<String>) -> Self {
        self.system_message = system_message.into();
        self
    }

    pub fn with_message(mut self, role: Role, content: impl Into<String>) -> Self {
        self.messages.message_values.push(MessageValue {
            role,
            content: content.into(),
        });
        self
    }

    pub fn with_version(mut self, version: impl Into<VersionSelector>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.variable_values.push(VariableValue {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_override(mut self, override_config: bool) -> Self {
        self.override_config = override_config;
        self
    }

    pub fn with_additional_fields(mut self, additional_fields: AdditionalFields) -> Self {
        self.additional_fields = additional_fields;
        self
    }
}

impl Default for NodeParameters {
    fn default() -> Self {
        Self {
            resource: Resource::default(),
            model: default_model(),
            system_message: default_system_message(),
            messages: MessageCollection::default(),
            prompt_id: String::new(),
            version: None,
            variables: VariableCollection::default(),
            override_config: false,
            additional_fields: AdditionalFields::default(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_owned()
}

fn default_system_message() -> String {
    DEFAULT_SYSTEM_MESSAGE.to_owned()
}

/// `messages` fixed collection: user / assistant turns after the system
/// message.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MessageCollection {
    #[serde(default)]
    pub message_values: Vec<MessageValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MessageValue {
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub content: String,
}

/// `variables` fixed collection of a managed-prompt call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct VariableCollection {
    #[serde(default)]
    pub variable_values: Vec<VariableValue>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VariableValue {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
}

/// Prompt version as selected in the editor: a version number picked from
/// the list, or free text (usually [`LATEST_VERSION`]) typed as an
/// expression. It is sent exactly as selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum VersionSelector {
    Number(i64),
    Text(String),
}

impl VersionSelector {
    pub fn latest() -> Self {
        VersionSelector::Text(LATEST_VERSION.to_owned())
    }

    /// An empty text selection or version `0` means "no version chosen".
    pub fn is_empty(&self) -> bool {
        match self {
            VersionSelector::Number(n) => *n == 0,
            VersionSelector::Text(s) => s.is_empty(),
        }
    }

    pub fn is_latest(&self) -> bool {
        matches!(self, VersionSelector::Text(s) if s == LATEST_VERSION)
    }
}

impl Display for VersionSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VersionSelector::Number(n) => write!(f, "{n}"),
            VersionSelector::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for VersionSelector {
    fn from(value: i64) -> Self {
        VersionSelector::Number(value)
    }
}

impl From<&str> for VersionSelector {
    fn from(value: &str) -> Self {
        VersionSelector::Text(value.to_owned())
    }
}

impl From<String> for VersionSelector {
    fn from(value: String) -> Self {
        VersionSelector::Text(value)
    }
}

/// The shared `additionalFields` collection. Every entry is optional; an
/// absent entry is simply not sent.
///
/// JSON-bearing entries stay raw text here and are parsed by the request
/// builder, so a malformed value fails only the item that carries it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdditionalFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_params_json: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_params: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_breakdown: Option<bool>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn empty_bag_uses_editor_defaults() {
        let params: NodeParameters = serde_json::from_value(json!({})).unwrap();
        assert_eq!(params.resource, Resource::GatewayPrompt);
        assert_eq!(params.model, DEFAULT_MODEL);
        assert_eq!(params.system_message, DEFAULT_SYSTEM_MESSAGE);
        assert!(!params.override_config);
        assert_eq!(params.version, None);
        assert_eq!(params.additional_fields, AdditionalFields::default());
    }

    #[test]
    fn decodes_host_parameter_names() {
        let params: NodeParameters = serde_json::from_value(json!({
            "resource": "gateway",
            "model": "gpt-4o",
            "systemMessage": "Be brief.",
            "messages": {"messageValues": [
                {"role": "user", "content": "Hi"},
                {"role": "assistant", "content": "Hello"},
                {"content": "And again"}
            ]},
            "additionalFields": {
                "overrideParamsJson": "{\"temperature\": 0.5}",
                "stream": false,
                "customIdentifier": "batch-7"
            }
        }))
        .unwrap();

        assert_eq!(params.resource, Resource::Gateway);
        assert_eq!(params.system_message, "Be brief.");
        let roles: Vec<Role> = params
            .messages
            .message_values
            .iter()
            .map(|m| m.role)
            .collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
        assert_eq!(params.additional_fields.stream, Some(false));
        assert_eq!(
            params.additional_fields.custom_identifier.as_deref(),
            Some("batch-7")
        );
        assert_eq!(params.additional_fields.request_breakdown, None);
    }

    #[test]
    fn message_rows_without_content_default_to_empty() {
        let params: NodeParameters = serde_json::from_value(json!({
            "messages": {"messageValues": [{"role": "assistant"}, {}]}
        }))
        .unwrap();

        let rows = &params.messages.message_values;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].role, Role::Assistant);
        assert!(rows.iter().all(|m| m.content.is_empty()));
    }

    #[test]
    fn version_accepts_numbers_and_text() {
        let numbered: NodeParameters =
            serde_json::from_value(json!({"promptId": "p1", "version": 3, "override": true}))
                .unwrap();
        assert_eq!(numbered.version, Some(VersionSelector::Number(3)));
        assert!(numbered.override_config);

        let latest: NodeParameters =
            serde_json::from_value(json!({"promptId": "p1", "version": "latest"})).unwrap();
        assert!(latest.version.as_ref().is_some_and(VersionSelector::is_latest));

        let blank: NodeParameters =
            serde_json::from_value(json!({"promptId": "p1", "version": ""})).unwrap();
        assert!(blank.version.as_ref().is_some_and(VersionSelector::is_empty));
    }

    #[test]
    fn unknown_resource_is_rejected() {
        let err = serde_json::from_value::<NodeParameters>(json!({"resource": "embeddings"}));
        assert!(err.is_err());
    }
}
