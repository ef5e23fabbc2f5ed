//! Provider selection.
//!
//! The provider set is fixed (Gemini preferred, OpenAI as fallback), so
//! selection is a direct match on configured credentials rather than a
//! dynamic registry.

use crate::config::RelayConfig;
use crate::llm::provider::{ChatProvider, LlmError};
use crate::llm::providers::{GeminiProvider, OpenAiProvider};

/// Pick the upstream provider for this process.
///
/// Gemini wins when both are configured; with neither configured this is a
/// [`LlmError::MissingCredentials`].
pub fn select_provider(config: &RelayConfig) -> Result<Box<dyn ChatProvider>, LlmError> {
    if let Some(settings) = &config.gemini {
        return Ok(Box::new(GeminiProvider::from_settings(settings)));
    }
    if let Some(settings) = &config.openai {
        return Ok(Box::new(OpenAiProvider::from_settings(settings)));
    }
    Err(LlmError::MissingCredentials)
}

/// Create a provider by name, for the CLI's explicit `--provider` override.
pub fn create_provider(
    name: &str,
    config: &RelayConfig,
) -> Result<Box<dyn ChatProvider>, LlmError> {
    match name {
        "gemini" => config
            .gemini
            .as_ref()
            .map(|settings| Box::new(GeminiProvider::from_settings(settings)) as Box<dyn ChatProvider>)
            .ok_or(LlmError::MissingCredentials),
        "openai" => config
            .openai
            .as_ref()
            .map(|settings| Box::new(OpenAiProvider::from_settings(settings)) as Box<dyn ChatProvider>)
            .ok_or(LlmError::MissingCredentials),
        other => Err(LlmError::InvalidRequest(format!(
            "unknown provider: {other}"
        ))),
    }
}
