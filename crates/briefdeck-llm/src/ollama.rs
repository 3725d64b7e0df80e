//! Ollama chat client
//!
//! Talks to a local Ollama instance through its OpenAI-compatible
//! `/v1/chat/completions` endpoint.
//!
//! # Features
//!
//! - Async HTTP communication with the Ollama API
//! - Explicit configuration (endpoint, model, temperature, timeout) instead
//!   of ambient constants
//! - Root-path reachability probe that never fails, only reports false
//! - Bounded request timeout so a hung model cannot stall a session forever

use crate::LlmConfig;
use briefdeck_domain::traits::ChatProvider;
use briefdeck_domain::{ChatMessage, InferenceError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Remediation hint reported when the endpoint does not answer the probe.
pub const UNAVAILABLE_HINT: &str =
    "make sure the Ollama application is running on this machine";

/// Chat client for a local Ollama instance.
pub struct OllamaChat {
    config: LlmConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
    stream: bool,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl OllamaChat {
    /// Create a new client from an explicit configuration.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use briefdeck_llm::{LlmConfig, OllamaChat};
    ///
    /// let chat = OllamaChat::new(LlmConfig::default());
    /// ```
    pub fn new(config: LlmConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap();

        Self { config, client }
    }

    /// The configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.config.endpoint
    }

    /// The configured model name.
    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait::async_trait]
impl ChatProvider for OllamaChat {
    async fn available(&self) -> bool {
        match self.client.get(&self.config.endpoint).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    async fn chat(&self, messages: &[ChatMessage]) -> Result<String, InferenceError> {
        if !self.available().await {
            return Err(InferenceError::ServiceUnavailable {
                hint: UNAVAILABLE_HINT.to_string(),
            });
        }

        let url = format!("{}/v1/chat/completions", self.config.endpoint);
        let request_body = ChatCompletionRequest {
            model: &self.config.model,
            messages: messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            temperature: self.config.temperature,
            stream: false,
        };

        debug!(
            turns = messages.len(),
            model = %self.config.model,
            "sending chat completion request"
        );

        let response = self
            .client
            .post(&url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| InferenceError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(InferenceError::RequestFailed(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(format!("failed to parse response: {}", e)))?;

        let reply = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| InferenceError::InvalidResponse("response carried no choices".to_string()))?;

        Ok(reply.trim().to_string())
    }
}
