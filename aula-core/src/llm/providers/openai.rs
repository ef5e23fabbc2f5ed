use reqwest::Client as HttpClient;
use serde_json::{Value, json};

use crate::config::ProviderSettings;
use crate::config::constants::{models, urls};
use crate::llm::provider::{ChatProvider, ChatRequest, LlmError};
use async_trait::async_trait;

pub struct OpenAiProvider {
    api_key: String,
    http_client: HttpClient,
    base_url: String,
    model: String,
}

impl OpenAiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_model(api_key, models::openai::DEFAULT_MODEL.to_string())
    }

    pub fn with_model(api_key: String, model: String) -> Self {
        Self {
            api_key,
            http_client: HttpClient::new(),
            base_url: urls::OPENAI_API_BASE.to_string(),
            model,
        }
    }

    pub fn from_settings(settings: &ProviderSettings) -> Self {
        let mut provider = Self::with_model(settings.api_key.clone(), settings.model.clone());
        provider.base_url = settings.base_url.clone();
        provider
    }

    /// Shape the request into the Chat Completions schema: a single-turn
    /// `messages` array with the sampling parameters at the top level.
    pub fn request_body(&self, request: &ChatRequest) -> Value {
        json!({
            "model": self.model,
            "messages": [{"role": "user", "content": request.prompt}],
            "temperature": request.params.temperature,
            "max_tokens": request.params.max_output_tokens,
            "top_p": request.params.top_p
        })
    }
}

#[async_trait]
impl ChatProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &ChatRequest) -> Result<Value, LlmError> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(request))
            .send()
            .await
            .map_err(|e| LlmError::Network(format!("OpenAI: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::from_status("OpenAI", status.as_u16(), &error_text));
        }

        response
            .json()
            .await
            .map_err(|e| LlmError::Provider(format!("OpenAI: failed to parse response: {e}")))
    }
}
