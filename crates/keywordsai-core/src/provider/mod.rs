//! Traits a backend implements so the node can talk to Keywords AI.
//!
//! Both traits return boxed futures so they stay object-safe without pulling
//! in `async_trait`.
mod gateway;
mod options;

pub use gateway::*;
pub use options::*;

use std::{future::Future, pin::Pin};

/// Boxed, sendable future returned by every provider method.
pub type ProviderFuture<'p, T> = Pin<Box<dyn Future<Output = crate::error::Result<T>> + Send + 'p>>;
