use serde_json::Value;

use crate::request::RequestBody;

use super::ProviderFuture;

/// A **gateway provider** turns a [`RequestBody`] into a network call to
/// `POST /chat/completions` and hands back the raw JSON answer.
///
/// The trait is intentionally minimal:
///
/// * **No typed response** – the node forwards whatever the gateway returns
///   as the item's output, so the reply stays a [`serde_json::Value`].
/// * **One round-trip per call** – retries, timeouts and connection pooling
///   belong to the transport behind the implementation.
pub trait GatewayProvider: Send + Sync {
    /// Send one chat-completion request.
    fn chat_completion<'p>(&'p self, body: RequestBody) -> ProviderFuture<'p, Value>;
}

impl<T: GatewayProvider + ?Sized> GatewayProvider for std::sync::Arc<T> {
    fn chat_completion<'p>(&'p self, body: RequestBody) -> ProviderFuture<'p, Value> {
        (**self).chat_completion(body)
    }
}
