use std::time::Duration;

use keywordsai_core::request::RequestBody;
use reqwest::{
    Client as HttpClient, Response,
    header::{ACCEPT, CONTENT_TYPE},
};
use serde_json::Value;
use tracing::debug;

use crate::{api_v1::collect_event_stream, error::KeywordsAiError};

pub(crate) const DEFAULT_BASE_URL: &str = "https://api.keywordsai.co/api";
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimal HTTP client for the Keywords AI REST API.
///
/// * Every request carries `Authorization: Bearer <api key>`.
/// * Responses are handed back as raw JSON; typed decoding happens in the
///   provider implementations.
/// * Shares a single `reqwest::Client`, so cloning `KeywordsAiClient` is
///   cheap.
#[derive(Clone)]
pub struct KeywordsAiClient {
    api_key: String,
    http: HttpClient,
    base: String,
}

impl std::fmt::Debug for KeywordsAiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordsAiClient")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}

impl KeywordsAiClient {
    /// Convenience constructor building a default `reqwest` client with a
    /// 30 s timeout and Rustls TLS.
    pub fn new(api_key: impl Into<String>) -> Result<Self, KeywordsAiError> {
        let http = HttpClient::builder().timeout(DEFAULT_TIMEOUT).build()?;

        Ok(Self::with_http(api_key, http, None))
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc.
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        let base = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned());
        Self {
            api_key: api_key.into(),
            http,
            base: base.trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// `GET {base}{path}` and return the JSON answer.
    pub async fn get(&self, path: &str) -> Result<Value, KeywordsAiError> {
        debug!(method = "GET", path, "sending request");
        let resp = self
            .http
            .get(format!("{}{}", self.base, path))
            .bearer_auth(&self.api_key)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        read_json(resp).await
    }

    /// `POST /chat/completions` with the given body.
    ///
    /// A streamed answer (`text/event-stream`) is collected into a JSON array
    /// holding one element per `data:` chunk.
    pub async fn chat_completion(&self, body: &RequestBody) -> Result<Value, KeywordsAiError> {
        debug!(
            method = "POST",
            path = "/chat/completions",
            gateway = body.is_gateway(),
            "sending request"
        );
        let resp = self
            .http
            .post(format!("{}/chat/completions", self.base))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        read_json(resp).await
    }

    /// Credential test: `GET /models` must answer with a success status.
    pub async fn verify_credentials(&self) -> Result<(), KeywordsAiError> {
        self.get("/models").await.map(|_| ())
    }
}

async fn read_json(resp: Response) -> Result<Value, KeywordsAiError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        debug!(%status, "request failed");
        return Err(KeywordsAiError::Api { status, body });
    }

    let event_stream = resp
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("text/event-stream"));

    let bytes = resp.bytes().await?;
    if event_stream {
        return collect_event_stream(&bytes);
    }
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    Ok(serde_json::from_slice(&bytes)?)
}
