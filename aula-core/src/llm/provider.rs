//! Provider abstraction for upstream generative-text services.
//!
//! A provider turns a composed prompt plus sampling parameters into the raw
//! JSON envelope its API returned. Envelope-to-text normalization is kept
//! out of the providers on purpose - it lives in [`crate::llm::extract`] so
//! one cascade serves every provider shape.

use async_trait::async_trait;
use serde_json::Value;

use crate::prompts::GenerationParams;

/// One question-answer exchange to relay upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub prompt: String,
    pub params: GenerationParams,
}

impl ChatRequest {
    pub fn new(prompt: String, params: GenerationParams) -> Self {
        Self { prompt, params }
    }
}

/// Upstream chat provider.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Provider name (e.g. "gemini", "openai") for logs and status probes.
    fn name(&self) -> &str;

    /// Model ID this provider will call.
    fn model(&self) -> &str;

    /// Send the request and return the raw response envelope.
    async fn generate(&self, request: &ChatRequest) -> Result<Value, LlmError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("no provider configured: set GEMINI_API_KEY or OPENAI_API_KEY")]
    MissingCredentials,
    #[error("rate limit exceeded")]
    RateLimit,
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("provider error: {0}")]
    Provider(String),
}

impl LlmError {
    /// Classify a non-2xx upstream response, picking out rate limiting
    /// the way quota errors actually surface in the wild.
    pub(crate) fn from_status(provider: &str, status: u16, body: &str) -> Self {
        if status == 429
            || body.contains("insufficient_quota")
            || body.contains("quota")
            || body.contains("rate limit")
        {
            LlmError::RateLimit
        } else {
            LlmError::Provider(format!("{provider}: HTTP {status}: {body}"))
        }
    }
}
