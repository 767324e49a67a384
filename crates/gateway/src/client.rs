//! REST client for the chat-completion endpoint.
//!
//! Wraps `POST {base_url}/v1/chat/completions` using [`reqwest`] and maps
//! upstream failures onto the generation error taxonomy (rate limited,
//! quota exhausted, other API error, empty response).

use std::time::Duration;

use serde::Deserialize;

/// Connection settings for the completion gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Base URL, e.g. `https://ai.gateway.example.dev`.
    pub base_url: String,
    /// Bearer token sent with every request.
    pub api_key: String,
    /// Model identifier forwarded verbatim.
    pub model: String,
    /// Sampling temperature (tunable default 0.7).
    pub temperature: f64,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// HTTP client for the completion gateway.
pub struct ChatClient {
    client: reqwest::Client,
    config: GatewayConfig,
}

/// Errors from the completion gateway layer.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Upstream returned 429.
    #[error("Rate limits exceeded, please try again later.")]
    RateLimited,

    /// Upstream returned 402.
    #[error("AI credits exhausted. Please add credits.")]
    QuotaExhausted,

    /// Any other non-2xx response, carrying the upstream message when one
    /// could be extracted from the body.
    #[error("AI gateway error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Upstream error message, or the raw body when unparseable.
        message: String,
    },

    /// A 2xx response with no extractable message content.
    #[error("No content in AI response")]
    NoContent,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

impl ChatClient {
    /// Create a new client for the configured gateway.
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`]
    /// (useful for connection pooling in tests).
    pub fn with_client(client: reqwest::Client, config: GatewayConfig) -> Self {
        Self { client, config }
    }

    /// Model identifier sent with each completion request.
    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Request a completion for a system + user message pair.
    ///
    /// Returns the first choice's message content. The call is bounded by
    /// the configured timeout; no retries are attempted.
    pub async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GatewayError> {
        let body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_prompt },
            ],
            "temperature": self.config.temperature,
        });

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                429 => GatewayError::RateLimited,
                402 => GatewayError::QuotaExhausted,
                code => {
                    let body = response.text().await.unwrap_or_default();
                    tracing::error!(status = code, body = %body, "AI gateway error");
                    GatewayError::Api {
                        status: code,
                        message: extract_error_message(&body),
                    }
                }
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(GatewayError::NoContent)
    }
}

/// Pull a human-readable message out of an upstream error body.
///
/// Understands `{"error": {"message": "..."}}` and `{"error": "..."}`;
/// anything else is returned raw (or a generic message when empty).
fn extract_error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = value
            .get("error")
            .and_then(|e| e.get("message"))
            .and_then(|m| m.as_str())
        {
            return message.to_string();
        }
        if let Some(message) = value.get("error").and_then(|e| e.as_str()) {
            return message.to_string();
        }
    }
    if body.trim().is_empty() {
        "AI generation failed".to_string()
    } else {
        body.to_string()
    }
}
