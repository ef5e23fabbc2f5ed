//! Environment-driven configuration for the relay.

pub mod api_keys;
pub mod constants;

use std::env;

use constants::{defaults, env_vars, models, urls};

/// Connection settings for one upstream provider.
#[derive(Debug, Clone)]
pub struct ProviderSettings {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

/// Full relay configuration, assembled once at startup.
///
/// A provider entry is `Some` only when its API key is present; the
/// selection logic in [`crate::llm::factory`] works off that.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub port: u16,
    pub cors_origin: String,
    pub gemini: Option<ProviderSettings>,
    pub openai: Option<ProviderSettings>,
}

impl RelayConfig {
    /// Build the configuration from the process environment.
    pub fn from_env() -> Self {
        let port = env::var(env_vars::PORT)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults::PORT);

        let cors_origin = env::var(env_vars::CORS_ORIGIN)
            .ok()
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| defaults::CORS_ORIGIN.to_string());

        let gemini = api_keys::gemini_api_key().map(|api_key| ProviderSettings {
            api_key,
            model: env_or_default(env_vars::GEMINI_MODEL, models::gemini::DEFAULT_MODEL),
            base_url: env_or_default(env_vars::GEMINI_API_URL, urls::GEMINI_API_BASE),
        });

        let openai = api_keys::openai_api_key().map(|api_key| ProviderSettings {
            api_key,
            model: env_or_default(env_vars::OPENAI_MODEL, models::openai::DEFAULT_MODEL),
            base_url: env_or_default(env_vars::OPENAI_API_URL, urls::OPENAI_API_BASE),
        });

        Self {
            port,
            cors_origin,
            gemini,
            openai,
        }
    }
}

fn env_or_default(name: &str, default: &str) -> String {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
