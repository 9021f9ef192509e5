//! # `keywordsai` – The umbrella crate
//!
//! One-stop import for the Keywords AI workflow node:
//!
//! | Crate                  | What it provides                                                              |
//! |------------------------|-------------------------------------------------------------------------------|
//! | **`keywordsai-core`**  | Parameters, request building, provider traits, `KeywordsAiNode`, errors       |
//! | **`keywordsai-api`**   | Authenticated HTTP client and option loaders for the Keywords AI API *(optional)* |
//!
//! The `api` feature is on by default. Without it only the backend-agnostic
//! core is re-exported, which is enough to build request bodies or to plug in
//! a backend of your own.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use keywordsai::{
//!     ExecutionSettings, KeywordsAiNode,
//!     api::KeywordsAiAdapterBuilder,
//!     parameters::NodeParameters,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = KeywordsAiAdapterBuilder::new_from_env().build()?;
//!     let node = KeywordsAiNode::new(backend)
//!         .with_settings(ExecutionSettings::default().with_continue_on_fail(true));
//!
//!     let items = [NodeParameters::prompt("my-prompt-id").with_variable("topic", "Rust")];
//!     for output in node.execute(&items).await? {
//!         println!("{output}");
//!     }
//!     Ok(())
//! }
//! ```
#![doc(html_root_url = "https://docs.rs/keywordsai/latest")]

pub use keywordsai_core::*;

#[cfg(feature = "api")]
pub use keywordsai_api as api;
