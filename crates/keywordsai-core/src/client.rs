//! The node itself: runs a batch of input items against a single backend.
//!
//! The client is **generic over the backend type `B`**. Executing items
//! requires `B: GatewayProvider`, refreshing dropdowns requires
//! `B: OptionsProvider`; the HTTP backend in `keywordsai-api` implements
//! both, tests plug in an in-memory fake.
//!
//! ```rust
//! use keywordsai_core::{KeywordsAiNode, ExecutionSettings};
//! use keywordsai_core::provider::{GatewayProvider, ProviderFuture};
//! use keywordsai_core::request::RequestBody;
//!
//! struct Echo;
//!
//! impl GatewayProvider for Echo {
//!     fn chat_completion<'p>(&'p self, body: RequestBody) -> ProviderFuture<'p, serde_json::Value> {
//!         Box::pin(async move { body.to_json() })
//!     }
//! }
//!
//! let node = KeywordsAiNode::new(Echo)
//!     .with_settings(ExecutionSettings::default().with_continue_on_fail(true));
//! # let _ = node;
//! ```
//!
//! Each item runs through `build request → send request → collect result`
//! with a single failure exit. Outputs always come back in input order, even
//! when several requests are in flight at once.
use std::sync::Arc;

use futures_util::{StreamExt, stream};
use serde_json::{Value, json};
use tracing::{debug, trace, warn};

use crate::{
    error::{ExecutionError, Result},
    options::{LoadOptionsMethod, OptionEntry},
    parameters::NodeParameters,
    provider::{GatewayProvider, OptionsProvider},
    request::RequestBody,
};

/// Host-controlled knobs of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionSettings {
    /// Turn a failing item into an `{"error": …}` output instead of aborting
    /// the batch.
    pub continue_on_fail: bool,
    /// Maximum number of requests in flight. `1` processes items strictly one
    /// after another.
    pub concurrency: usize,
}

impl Default for ExecutionSettings {
    fn default() -> Self {
        Self {
            continue_on_fail: false,
            concurrency: 1,
        }
    }
}

impl ExecutionSettings {
    pub fn with_continue_on_fail(mut self, continue_on_fail: bool) -> Self {
        self.continue_on_fail = continue_on_fail;
        self
    }

    /// Values below one are treated as one.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }
}

/// A node bound to a single backend.
///
/// Clone the node if you need to share it across tasks; the backend sits
/// behind an `Arc`.
#[derive(Debug)]
pub struct KeywordsAiNode<B> {
    backend: Arc<B>,
    settings: ExecutionSettings,
}

impl<B> Clone for KeywordsAiNode<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            settings: self.settings,
        }
    }
}

impl<B> KeywordsAiNode<B> {
    /// Create a new node that delegates all calls to `backend`.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
            settings: ExecutionSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: ExecutionSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Access the underlying backend (e.g. to verify credentials).
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn settings(&self) -> ExecutionSettings {
        self.settings
    }
}

impl<B: GatewayProvider> KeywordsAiNode<B> {
    /// Build and send the request of a single item.
    pub async fn process_item(&self, params: &NodeParameters) -> Result<Value> {
        let body = RequestBody::try_from(params)?;
        trace!(gateway = body.is_gateway(), "request body built");
        self.backend.chat_completion(body).await
    }

    /// Process `items` and return one output per item, in input order.
    ///
    /// # Errors
    ///
    /// Unless [`ExecutionSettings::continue_on_fail`] is set, the first
    /// failing item aborts the batch. The returned [`ExecutionError`] names
    /// the item and keeps the outputs completed before it.
    pub async fn execute(
        &self,
        items: &[NodeParameters],
    ) -> std::result::Result<Vec<Value>, ExecutionError> {
        debug!(
            items = items.len(),
            concurrency = self.settings.concurrency,
            "executing node"
        );

        let mut results = std::pin::pin!(
            stream::iter(items.iter().enumerate())
                .map(|(index, params)| async move { (index, self.process_item(params).await) })
                .buffered(self.settings.concurrency.max(1))
        );

        let mut outputs = Vec::with_capacity(items.len());
        while let Some((index, result)) = results.next().await {
            match result {
                Ok(output) => outputs.push(output),
                Err(err) if self.settings.continue_on_fail => {
                    warn!(index, error = %err, "item failed, continuing");
                    outputs.push(json!({ "error": err.to_string() }));
                }
                Err(source) => {
                    warn!(index, error = %source, "item failed, aborting");
                    return Err(ExecutionError {
                        index,
                        completed: outputs,
                        source,
                    });
                }
            }
        }

        Ok(outputs)
    }
}

impl<B: OptionsProvider> KeywordsAiNode<B> {
    /// Answer one of the host's load-options requests using the selections
    /// currently made in the editor.
    pub async fn load_options(
        &self,
        method: LoadOptionsMethod,
        current: &NodeParameters,
    ) -> Result<Vec<OptionEntry>> {
        debug!(method = method.as_str(), "loading options");
        match method {
            LoadOptionsMethod::GetPrompts => self.backend.list_prompts().await,
            LoadOptionsMethod::GetVersions => self.backend.list_versions(&current.prompt_id).await,
            LoadOptionsMethod::GetVariables => {
                let version = current
                    .version
                    .as_ref()
                    .filter(|v| !v.is_empty())
                    .map(ToString::to_string)
                    .unwrap_or_default();
                self.backend
                    .list_variables(&current.prompt_id, &version)
                    .await
            }
        }
    }
}
