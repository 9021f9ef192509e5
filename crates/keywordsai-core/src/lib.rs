//! Backend-agnostic core of the Keywords AI workflow node.
//!
//! * [`parameters`] – the per-item parameter bag handed over by the host.
//! * [`request`] – turns a parameter bag into a gateway or managed-prompt body.
//! * [`provider`] – traits a backend implements (`GatewayProvider`,
//!   `OptionsProvider`).
//! * [`client`] – [`KeywordsAiNode`], which runs a batch of items and answers
//!   load-options requests.
pub mod client;
pub mod error;
pub mod generic;
pub mod options;
pub mod parameters;
pub mod provider;
pub mod request;
pub mod schema_util;

pub use client::{ExecutionSettings, KeywordsAiNode};
