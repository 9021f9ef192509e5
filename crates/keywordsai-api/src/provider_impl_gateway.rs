use std::sync::Arc;

use keywordsai_core::{
    provider::{GatewayProvider, ProviderFuture},
    request::RequestBody,
};
use serde_json::Value;

use crate::KeywordsAiAdapter;

impl GatewayProvider for KeywordsAiAdapter {
    fn chat_completion<'p>(&'p self, body: RequestBody) -> ProviderFuture<'p, Value> {
        let client = Arc::clone(&self.client);

        Box::pin(async move { Ok(client.chat_completion(&body).await?) })
    }
}
