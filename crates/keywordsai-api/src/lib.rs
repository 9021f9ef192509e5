//! Keywords AI backend for the workflow node.
//!
//! [`KeywordsAiAdapter`] implements both provider traits of
//! `keywordsai-core` over the REST API at `https://api.keywordsai.co/api`.
mod adapter;
pub mod api_v1;
mod client;
mod credentials;
pub mod error;
mod provider_impl_gateway;
mod provider_impl_options;

pub use adapter::{API_KEY_ENV, BASE_URL_ENV, KeywordsAiAdapter, KeywordsAiAdapterBuilder};
pub use client::KeywordsAiClient;
pub use credentials::Credentials;
