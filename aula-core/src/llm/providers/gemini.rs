use reqwest::Client as HttpClient;
use serde_json::{Value, json};

use crate::config::ProviderSettings;
use crate::config::constants::{models, urls};
use crate::llm::provider::{ChatProvider, ChatRequest, LlmError};
use async_trait::async_trait;

pub struct GeminiProvider {
    api_key: String,
    http_client: HttpClient,
    base_url: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_model(api_key, models::gemini::DEFAULT_MODEL.to_string())
    }

    pub fn with_model(api_key: String, model: String) -> Self {
        Self {
            api_key,
            http_client: HttpClient::new(),
            base_url: urls::GEMINI_API_BASE.to_string(),
            model,
        }
    }

    pub fn from_settings(settings: &ProviderSettings) -> Self {
        let mut provider = Self::with_model(settings.api_key.clone(), settings.model.clone());
        provider.base_url = settings.base_url.clone();
        provider
    }

    /// Shape the request into the Gemini `generateContent` schema:
    /// a `contents`/`parts` nesting plus a `generationConfig` carrying the
    /// tier's sampling parameters.
    pub fn request_body(&self, request: &ChatRequest) -> Value {
        json!({
            "contents": [
                {
                    "role": "user",
                    "parts": [{"text": request.prompt}]
                }
            ],
            "generationConfig": {
                "temperature": request.params.temperature,
                "maxOutputTokens": request.params.max_output_tokens,
                "topP": request.params.top_p
            }
        })
    }
}

#[async_trait]
impl ChatProvider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate(&self, request: &ChatRequest) -> Result<Value, LlmError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let response = self
            .http_client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&self.request_body(request))
            .send()
            .await
            .map_err(|e| LlmError::Network(format!("Gemini: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LlmError::from_status("Gemini", status.as_u16(), &error_text));
        }

        response
            .json()
            .await
            .map_err(|e| LlmError::Provider(format!("Gemini: failed to parse response: {e}")))
    }
}
