//! Request bodies for `POST /chat/completions`.
//!
//! A body always has exactly one of two shapes:
//!
//! * **gateway** – `{"model": …, "messages": [...]}`
//! * **prompt** – `{"prompt": {"prompt_id": …, "variables": {...}, "override": …}}`
//!
//! [`RequestPayload`] keeps the two shapes apart at the type level; the
//! optional extras from `additionalFields` live next to it on
//! [`RequestBody`] and are merged in when the body is serialised.
//!
//! ```rust
//! use keywordsai_core::parameters::NodeParameters;
//! use keywordsai_core::request::RequestBody;
//!
//! let params = NodeParameters::gateway("gpt-4o-mini");
//! let body = RequestBody::try_from(&params).unwrap();
//! assert_eq!(body.to_json().unwrap()["model"], "gpt-4o-mini");
//! ```
use serde::{Serialize, Serializer, ser::Error as _};
use serde_json::{Map, Value};

use crate::error::{NodeError, Result};
use crate::generic::ConversationMessage;
use crate::parameters::{AdditionalFields, NodeParameters, Resource, VersionSelector};

/// JSON object as produced by the free-text JSON parameters.
pub type JsonObject = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequestPayload {
    Gateway {
        model: String,
        messages: Vec<ConversationMessage>,
    },
    Prompt {
        prompt: PromptReference,
    },
}

/// Reference to a managed prompt plus the values substituted into it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromptReference {
    pub prompt_id: String,
    pub variables: JsonObject,
    pub r#override: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<VersionSelector>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub override_params: Option<JsonObject>,
}

/// Fully assembled body for one input item.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestBody {
    pub payload: RequestPayload,
    /// Override params of a gateway call; shallow-merged into the top level.
    pub top_level_params: Option<JsonObject>,
    pub stream: Option<bool>,
    pub metadata: Option<JsonObject>,
    pub custom_identifier: Option<String>,
    pub customer_identifier: Option<String>,
    pub customer_params: Option<JsonObject>,
    pub request_breakdown: Option<bool>,
}

impl RequestBody {
    fn new(payload: RequestPayload) -> Self {
        Self {
            payload,
            top_level_params: None,
            stream: None,
            metadata: None,
            custom_identifier: None,
            customer_identifier: None,
            customer_params: None,
            request_breakdown: None,
        }
    }

    /// Build the body for one item from its resolved parameters.
    ///
    /// # Errors
    ///
    /// * [`NodeError::InvalidRequest`] – required `model` / `promptId` is
    ///   empty, or gateway override params try to add a `prompt` key.
    /// * [`NodeError::InvalidJson`] / [`NodeError::NotAnObject`] – one of the
    ///   JSON-bearing additional fields is malformed.
    pub fn from_parameters(params: &NodeParameters) -> Result<Self> {
        let payload = match params.resource {
            Resource::Gateway => gateway_payload(params)?,
            Resource::GatewayPrompt => prompt_payload(params)?,
        };

        let mut body = Self::new(payload);
        body.apply_additional_fields(&params.additional_fields)?;
        Ok(body)
    }

    fn apply_additional_fields(&mut self, fields: &AdditionalFields) -> Result<()> {
        if let Some(params) = parse_json_object("overrideParamsJson", &fields.override_params_json)? {
            match &mut self.payload {
                RequestPayload::Prompt { prompt } => prompt.override_params = Some(params),
                RequestPayload::Gateway { .. } => {
                    if params.contains_key("prompt") {
                        return Err(NodeError::InvalidRequest(
                            "override params of a gateway call must not contain `prompt`".into(),
                        ));
                    }
                    self.top_level_params = Some(params);
                }
            }
        }

        self.stream = fields.stream;
        self.metadata = parse_json_object("metadata", &fields.metadata)?;
        self.custom_identifier = non_empty(&fields.custom_identifier);
        self.customer_identifier = non_empty(&fields.customer_identifier);
        self.customer_params = parse_json_object("customerParams", &fields.customer_params)?;
        self.request_breakdown = fields.request_breakdown;

        Ok(())
    }

    pub fn is_gateway(&self) -> bool {
        matches!(self.payload, RequestPayload::Gateway { .. })
    }

    /// Render the wire JSON object.
    ///
    /// Keys are emitted in a fixed order: payload fields, gateway override
    /// params (which may replace `model` / `messages`), then the additional
    /// fields. A later key replaces an earlier one of the same name.
    pub fn to_json(&self) -> Result<Value> {
        let Value::Object(mut body) = serde_json::to_value(&self.payload)? else {
            return Err(NodeError::Invalid("request payload is not a JSON object".into()));
        };

        if let Some(params) = &self.top_level_params {
            for (key, value) in params {
                body.insert(key.clone(), value.clone());
            }
        }
        if let Some(stream) = self.stream {
            body.insert("stream".into(), Value::Bool(stream));
        }
        if let Some(metadata) = &self.metadata {
            body.insert("metadata".into(), Value::Object(metadata.clone()));
        }
        if let Some(id) = &self.custom_identifier {
            body.insert("custom_identifier".into(), Value::String(id.clone()));
        }
        if let Some(id) = &self.customer_identifier {
            body.insert("customer_identifier".into(), Value::String(id.clone()));
        }
        if let Some(params) = &self.customer_params {
            body.insert("customer_params".into(), Value::Object(params.clone()));
        }
        if let Some(breakdown) = self.request_breakdown {
            body.insert("request_breakdown".into(), Value::Bool(breakdown));
        }

        Ok(Value::Object(body))
    }
}

impl TryFrom<&NodeParameters> for RequestBody {
    type Error = NodeError;

    fn try_from(value: &NodeParameters) -> Result<Self> {
        Self::from_parameters(value)
    }
}

impl Serialize for RequestBody {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json()
            .map_err(S::Error::custom)?
            .serialize(serializer)
    }
}

fn gateway_payload(params: &NodeParameters) -> Result<RequestPayload> {
    if params.model.is_empty() {
        return Err(NodeError::InvalidRequest("`model` is required".into()));
    }

    // The system message is sent even when blank.
    let messages = std::iter::once(ConversationMessage::system(params.system_message.clone()))
        .chain(
            params
                .messages
                .message_values
                .iter()
                .map(|m| ConversationMessage::new(m.role, m.content.clone())),
        )
        .collect();

    Ok(RequestPayload::Gateway {
        model: params.model.clone(),
        messages,
    })
}

fn prompt_payload(params: &NodeParameters) -> Result<RequestPayload> {
    if params.prompt_id.is_empty() {
        return Err(NodeError::InvalidRequest("`promptId` is required".into()));
    }

    let mut variables = JsonObject::new();
    for variable in &params.variables.variable_values {
        variables.insert(variable.name.clone(), Value::String(variable.value.clone()));
    }

    let version = params
        .version
        .as_ref()
        .filter(|v| !v.is_empty())
        .cloned();

    Ok(RequestPayload::Prompt {
        prompt: PromptReference {
            prompt_id: params.prompt_id.clone(),
            variables,
            r#override: params.override_config,
            version,
            override_params: None,
        },
    })
}

fn parse_json_object(field: &'static str, raw: &Option<String>) -> Result<Option<JsonObject>> {
    let Some(raw) = raw.as_deref().filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    match serde_json::from_str(raw) {
        Ok(Value::Object(object)) => Ok(Some(object)),
        Ok(_) => Err(NodeError::NotAnObject { field }),
        Err(source) => Err(NodeError::InvalidJson { field, source }),
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|s| !s.is_empty()).cloned()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::generic::Role;

    fn body_json(params: &NodeParameters) -> Value {
        RequestBody::try_from(params).unwrap().to_json().unwrap()
    }

    #[test]
    fn gateway_with_defaults_sends_only_the_system_message() {
        let params = NodeParameters::gateway("gpt-4o-mini")
            .with_system_message("You are a helpful assistant.");

        assert_eq!(
            body_json(&params),
            json!({
                "model": "gpt-4o-mini",
                "messages": [{"role": "system", "content": "You are a helpful assistant."}]
            })
        );
    }

    #[test]
    fn gateway_keeps_blank_system_message_and_declared_order() {
        let params = NodeParameters::gateway("gpt-4o")
            .with_system_message("")
            .with_message(Role::User, "Hi")
            .with_message(Role::Assistant, "Hello!")
            .with_message(Role::User, "Tell me a joke");

        let body = body_json(&params);
        assert_eq!(
            body["messages"],
            json!([
                {"role": "system", "content": ""},
                {"role": "user", "content": "Hi"},
                {"role": "assistant", "content": "Hello!"},
                {"role": "user", "content": "Tell me a joke"}
            ])
        );
        assert!(body.get("prompt").is_none());
    }

    #[test]
    fn prompt_with_latest_version_and_override_params() {
        let params = NodeParameters::prompt("p1")
            .with_version("latest")
            .with_variable("x", "1")
            .with_additional_fields(AdditionalFields {
                override_params_json: Some(r#"{"temperature":0.2}"#.into()),
                ..Default::default()
            });

        let body = body_json(&params);
        assert_eq!(
            body,
            json!({
                "prompt": {
                    "prompt_id": "p1",
                    "variables": {"x": "1"},
                    "override": false,
                    "version": "latest",
                    "override_params": {"temperature": 0.2}
                }
            })
        );
        assert!(body.get("messages").is_none());
        assert!(body.get("temperature").is_none());
    }

    #[test]
    fn prompt_omits_blank_version_and_keeps_last_duplicate_variable() {
        let params = NodeParameters::prompt("p2")
            .with_version("")
            .with_variable("topic", "rust")
            .with_variable("tone", "dry")
            .with_variable("topic", "serde")
            .with_override(true);

        let body = body_json(&params);
        assert_eq!(
            body["prompt"],
            json!({
                "prompt_id": "p2",
                "variables": {"topic": "serde", "tone": "dry"},
                "override": true
            })
        );
    }

    #[test]
    fn numeric_version_is_sent_as_a_number() {
        let params = NodeParameters::prompt("p3").with_version(4);
        assert_eq!(body_json(&params)["prompt"]["version"], json!(4));
    }

    #[test]
    fn version_zero_is_treated_as_unset() {
        let params = NodeParameters::prompt("p3").with_version(0);
        assert!(body_json(&params)["prompt"].get("version").is_none());
    }

    #[test]
    fn gateway_override_params_merge_into_top_level() {
        let params = NodeParameters::gateway("gpt-4o-mini").with_additional_fields(
            AdditionalFields {
                override_params_json: Some(r#"{"model":"claude-3-5-sonnet","max_tokens":64}"#.into()),
                ..Default::default()
            },
        );

        let body = body_json(&params);
        assert_eq!(body["model"], "claude-3-5-sonnet");
        assert_eq!(body["max_tokens"], 64);
        assert!(body["messages"].is_array());
    }

    #[test]
    fn gateway_override_params_may_not_introduce_a_prompt() {
        let params = NodeParameters::gateway("gpt-4o-mini").with_additional_fields(
            AdditionalFields {
                override_params_json: Some(r#"{"prompt":{"prompt_id":"p1"}}"#.into()),
                ..Default::default()
            },
        );

        let err = RequestBody::try_from(&params).unwrap_err();
        assert!(matches!(err, NodeError::InvalidRequest(_)));
    }

    #[test]
    fn additional_fields_are_attached_when_present() {
        let params = NodeParameters::gateway("gpt-4o-mini").with_additional_fields(
            AdditionalFields {
                override_params_json: Some(r#"{"stream":true}"#.into()),
                stream: Some(false),
                metadata: Some(r#"{"session_id":"123"}"#.into()),
                custom_identifier: Some("nightly".into()),
                customer_identifier: Some(String::new()),
                customer_params: Some(r#"{"name":"Ada"}"#.into()),
                request_breakdown: Some(false),
            },
        );

        let body = body_json(&params);
        // the explicit stream flag wins over the override params
        assert_eq!(body["stream"], json!(false));
        assert_eq!(body["metadata"], json!({"session_id": "123"}));
        assert_eq!(body["custom_identifier"], "nightly");
        assert!(body.get("customer_identifier").is_none());
        assert_eq!(body["customer_params"], json!({"name": "Ada"}));
        assert_eq!(body["request_breakdown"], json!(false));
    }

    #[test]
    fn empty_json_fields_are_skipped() {
        let params = NodeParameters::prompt("p1").with_additional_fields(AdditionalFields {
            override_params_json: Some(String::new()),
            metadata: Some(String::new()),
            ..Default::default()
        });

        let body = body_json(&params);
        assert!(body["prompt"].get("override_params").is_none());
        assert!(body.get("metadata").is_none());
        assert!(body.get("stream").is_none());
    }

    #[test]
    fn malformed_override_params_fail_the_item() {
        for params in [
            NodeParameters::gateway("gpt-4o-mini"),
            NodeParameters::prompt("p1"),
        ] {
            let params = params.with_additional_fields(AdditionalFields {
                override_params_json: Some("{bad json".into()),
                ..Default::default()
            });
            let err = RequestBody::try_from(&params).unwrap_err();
            assert!(
                matches!(err, NodeError::InvalidJson { field: "overrideParamsJson", .. }),
                "unexpected error: {err:?}"
            );
        }
    }

    #[test]
    fn json_fields_must_be_objects() {
        let params = NodeParameters::prompt("p1").with_additional_fields(AdditionalFields {
            customer_params: Some("[1, 2]".into()),
            ..Default::default()
        });
        let err = RequestBody::try_from(&params).unwrap_err();
        assert!(matches!(err, NodeError::NotAnObject { field: "customerParams" }));
    }

    #[test]
    fn required_identifiers_are_checked() {
        assert!(matches!(
            RequestBody::try_from(&NodeParameters::prompt("")),
            Err(NodeError::InvalidRequest(_))
        ));
        assert!(matches!(
            RequestBody::try_from(&NodeParameters::gateway("")),
            Err(NodeError::InvalidRequest(_))
        ));
    }

    #[test]
    fn serialize_matches_to_json() {
        let params = NodeParameters::prompt("p9").with_variable("a", "b");
        let body = RequestBody::try_from(&params).unwrap();
        assert_eq!(serde_json::to_value(&body).unwrap(), body.to_json().unwrap());
        assert!(!body.is_gateway());
    }
}
