use std::{env, sync::Arc, time::Duration};

use keywordsai_core::error::{NodeError, Result};
use reqwest::Client as HttpClient;

use crate::{
    client::{DEFAULT_TIMEOUT, KeywordsAiClient},
    credentials::Credentials,
    error::KeywordsAiError,
};

pub const API_KEY_ENV: &str = "KEYWORDSAI_API_KEY";
pub const BASE_URL_ENV: &str = "KEYWORDSAI_BASE_URL";

/// Thin wrapper that wires the HTTP client [`KeywordsAiClient`] into a value
/// that implements the node's provider traits
/// ([`GatewayProvider`](keywordsai_core::provider::GatewayProvider) and
/// [`OptionsProvider`](keywordsai_core::provider::OptionsProvider)).
///
/// Plug it into a [`KeywordsAiNode`](keywordsai_core::KeywordsAiNode) to run
/// items or to answer load-options requests.
#[derive(Debug, Clone)]
pub struct KeywordsAiAdapter {
    pub(crate) client: Arc<KeywordsAiClient>,
}

impl KeywordsAiAdapter {
    /// Run the credential test (`GET /models`).
    pub async fn verify_credentials(&self) -> Result<()> {
        Ok(self.client.verify_credentials().await?)
    }

    pub fn client(&self) -> &KeywordsAiClient {
        &self.client
    }
}

/// Builder for [`KeywordsAiAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use keywordsai_api::KeywordsAiAdapterBuilder;
///
/// let backend = KeywordsAiAdapterBuilder::new_from_env()
///     .build()
///     .expect("KEYWORDSAI_API_KEY must be set");
/// ```
#[derive(Debug, Default)]
pub struct KeywordsAiAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
}

impl KeywordsAiAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the API key from `KEYWORDSAI_API_KEY` and, when set, the base
    /// URL from `KEYWORDSAI_BASE_URL`.
    ///
    /// Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var(API_KEY_ENV).ok(),
            base_url: env::var(BASE_URL_ENV).ok().filter(|url| !url.is_empty()),
            timeout: None,
        }
    }

    /// Start from the host's stored credential record.
    pub fn from_credentials(credentials: &Credentials) -> Self {
        Self::new().with_api_key(credentials.api_key.clone())
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the adapter at another deployment (or a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Per-request timeout of the underlying transport. Defaults to 30 s.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`NodeError::Invalid`] – if the API key is missing or empty.
    /// * [`NodeError::Backend`] – if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<KeywordsAiAdapter> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .ok_or_else(|| NodeError::Invalid(format!("missing API key: set `{API_KEY_ENV}`")))?;

        let http = HttpClient::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(KeywordsAiError::from)?;

        Ok(KeywordsAiAdapter {
            client: Arc::new(KeywordsAiClient::with_http(api_key, http, self.base_url)),
        })
    }
}
