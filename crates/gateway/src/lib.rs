//! HTTP client for the chat-completion gateway.
//!
//! The generation pipeline's single outbound dependency: a chat-style
//! completion call (system message, user message, temperature) against an
//! OpenAI-compatible endpoint.

mod client;

pub use client::{ChatClient, GatewayConfig, GatewayError};

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "google/gemini-3-flash-preview";

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

/// Default outbound request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
