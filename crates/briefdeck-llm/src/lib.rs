//! Briefdeck LLM Provider Layer
//!
//! Implementations of the [`ChatProvider`] trait from `briefdeck-domain`.
//!
//! # Providers
//!
//! - [`MockChat`]: deterministic mock for testing
//! - [`OllamaChat`]: local Ollama instance over its OpenAI-compatible chat API
//!
//! # Examples
//!
//! ```
//! use briefdeck_llm::MockChat;
//! use briefdeck_domain::traits::ChatProvider;
//! use briefdeck_domain::ChatMessage;
//!
//! # tokio_test::block_on(async {
//! let provider = MockChat::new("Hello from the model!");
//! let reply = provider.chat(&[ChatMessage::user("hi")]).await.unwrap();
//! assert_eq!(reply, "Hello from the model!");
//! # });
//! ```

#![warn(missing_docs)]

pub mod ollama;

use briefdeck_domain::traits::ChatProvider;
use briefdeck_domain::{ChatMessage, InferenceError};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

pub use ollama::{OllamaChat, UNAVAILABLE_HINT};

/// Default inference endpoint (local Ollama).
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default model name.
pub const DEFAULT_MODEL: &str = "phi3";

/// Default sampling temperature. Low on purpose: the breakdown format wants
/// focus and determinism over creativity.
pub const DEFAULT_TEMPERATURE: f32 = 0.2;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Explicit configuration for a chat provider.
///
/// Threaded into the client constructor; there is no process-wide mutable
/// endpoint or model name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL of the inference endpoint
    pub endpoint: String,

    /// Model to use (e.g. "phi3", "mistral")
    pub model: String,

    /// Sampling temperature for completions
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_temperature() -> f32 {
    DEFAULT_TEMPERATURE
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Mock chat provider for deterministic testing
///
/// Returns a pre-configured reply without making any network calls, records
/// every turn sequence it receives, and can be scripted to be unavailable or
/// to fail.
#[derive(Debug, Clone)]
pub struct MockChat {
    reply: String,
    available: bool,
    fail_with: Option<String>,
    calls: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
}

impl MockChat {
    /// Create a mock that answers every chat with a fixed reply.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            available: true,
            fail_with: None,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock whose endpoint probe reports unreachable.
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new("")
        }
    }

    /// Script the mock to fail every chat with a request failure.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            fail_with: Some(message.into()),
            ..Self::new("")
        }
    }

    /// Number of chat calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// The turn sequence of the most recent chat call, if any.
    pub fn last_messages(&self) -> Option<Vec<ChatMessage>> {
        self.calls.lock().unwrap().last().cloned()
    }
}

#[async_trait::async_trait]
impl ChatProvider for MockChat {
    async fn available(&self) -> bool {
        self.available
    }

    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, InferenceError> {
        if !self.available {
            return Err(InferenceError::ServiceUnavailable {
                hint: UNAVAILABLE_HINT.to_string(),
            });
        }

        self.calls.lock().unwrap().push(messages.to_vec());

        if let Some(message) = &self.fail_with {
            return Err(InferenceError::RequestFailed(message.clone()));
        }

        Ok(self.reply.trim().to_string())
    }
}
