use crate::options::OptionEntry;

use super::ProviderFuture;

/// Loads the values offered in the prompt-related dropdowns.
///
/// Implementations short-circuit to an empty list when a required selection
/// is missing; network failures are returned unchanged so the host can show
/// them next to the field.
pub trait OptionsProvider: Send + Sync {
    /// All prompts visible to the API key (first page only).
    fn list_prompts<'p>(&'p self) -> ProviderFuture<'p, Vec<OptionEntry>>;

    /// Versions of `prompt_id`, headed by the synthetic `latest` entry.
    ///
    /// Returns an empty list without any network call when `prompt_id` is
    /// empty.
    fn list_versions<'p>(&'p self, prompt_id: &'p str) -> ProviderFuture<'p, Vec<OptionEntry>>;

    /// Variable names declared by `prompt_id` at `version`.
    ///
    /// `version` may be the `latest` alias, which is resolved to the highest
    /// version number before the variables are fetched. Returns an empty list
    /// without any network call when either argument is empty.
    fn list_variables<'p>(
        &'p self,
        prompt_id: &'p str,
        version: &'p str,
    ) -> ProviderFuture<'p, Vec<OptionEntry>>;
}
