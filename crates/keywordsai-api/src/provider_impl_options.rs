use std::sync::Arc;

use keywordsai_core::{
    error::Result,
    options::{LATEST_VERSION, OptionEntry},
    provider::{OptionsProvider, ProviderFuture},
};
use serde_json::Value;
use tracing::debug;

use crate::{
    KeywordsAiAdapter,
    api_v1::{
        LATEST_VERSION_LOOKUP, PROMPT_LIST, PromptRecord, VERSION_LIST, VersionDetail,
        VersionRecord, unwrap_list,
    },
    client::KeywordsAiClient,
};

impl OptionsProvider for KeywordsAiAdapter {
    fn list_prompts<'p>(&'p self) -> ProviderFuture<'p, Vec<OptionEntry>> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let response = client.get("/prompts/").await?;
            let prompts: Vec<PromptRecord> = unwrap_list(&response, PROMPT_LIST);
            Ok(prompts.into_iter().map(Into::into).collect())
        })
    }

    fn list_versions<'p>(&'p self, prompt_id: &'p str) -> ProviderFuture<'p, Vec<OptionEntry>> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            if prompt_id.is_empty() {
                return Ok(Vec::new());
            }

            let response = client.get(&versions_path(prompt_id)).await?;
            let versions: Vec<VersionRecord> = unwrap_list(&response, VERSION_LIST);

            let mut options = Vec::with_capacity(versions.len() + 1);
            options.push(OptionEntry::latest_version());
            options.extend(versions.into_iter().map(OptionEntry::from));
            Ok(options)
        })
    }

    fn list_variables<'p>(
        &'p self,
        prompt_id: &'p str,
        version: &'p str,
    ) -> ProviderFuture<'p, Vec<OptionEntry>> {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            if prompt_id.is_empty() || version.is_empty() {
                return Ok(Vec::new());
            }

            let version = if version == LATEST_VERSION {
                resolve_latest(&client, prompt_id).await?
            } else {
                version.to_owned()
            };

            let response = client
                .get(&format!("{}{version}/", versions_path(prompt_id)))
                .await?;
            let detail = match response {
                Value::Null => VersionDetail::default(),
                other => serde_json::from_value::<VersionDetail>(other)?,
            };

            Ok(detail
                .variable_names()
                .map(|name| OptionEntry::new(name, name))
                .collect())
        })
    }
}

fn versions_path(prompt_id: &str) -> String {
    format!("/prompts/{prompt_id}/versions/")
}

/// Highest version number of `prompt_id`, or the `latest` alias itself when
/// the lookup finds no versions.
async fn resolve_latest(client: &KeywordsAiClient, prompt_id: &str) -> Result<String> {
    let response = client.get(&versions_path(prompt_id)).await?;
    let versions: Vec<VersionRecord> = unwrap_list(&response, LATEST_VERSION_LOOKUP);

    let resolved = versions
        .iter()
        .map(|v| v.version)
        .max()
        .map_or_else(|| LATEST_VERSION.to_owned(), |v| v.to_string());
    debug!(prompt_id, version = %resolved, "resolved latest prompt version");
    Ok(resolved)
}
