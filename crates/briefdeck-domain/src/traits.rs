//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the orchestration logic and
//! infrastructure. Implementations live in other crates.

use crate::{ChatMessage, Example, InferenceError};

/// Trait for persisting and retrieving analysis examples
///
/// Implemented by the infrastructure layer (briefdeck-store). The store is
/// append-only: there is no update or delete operation.
pub trait ExampleStore {
    /// Error type for store operations
    type Error;

    /// Append a new example with a store-assigned timestamp
    fn record(&mut self, brief_text: &str, breakdown_text: &str) -> Result<(), Self::Error>;

    /// Up to `limit` most-recently-created examples, newest first.
    ///
    /// `limit = 0` returns an empty sequence.
    fn recent(&self, limit: usize) -> Result<Vec<Example>, Self::Error>;

    /// Total number of stored examples
    fn count(&self) -> Result<u64, Self::Error>;
}

/// Trait for chat-completion inference
///
/// Implemented by the infrastructure layer (briefdeck-llm).
#[async_trait::async_trait]
pub trait ChatProvider {
    /// Lightweight reachability probe against the inference endpoint.
    ///
    /// Never fails: network trouble reports `false`.
    async fn available(&self) -> bool;

    /// Send an ordered turn sequence and return the model's single reply,
    /// trimmed of leading and trailing whitespace.
    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, InferenceError>;
}
