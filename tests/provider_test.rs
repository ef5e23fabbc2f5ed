//! Request shaping and provider selection, without touching the network.

use aula_core::config::{ProviderSettings, RelayConfig};
use aula_core::llm::{ChatRequest, GeminiProvider, OpenAiProvider, select_provider};
use aula_core::prompts::{Tier, compose};

fn settings(key: &str) -> ProviderSettings {
    ProviderSettings {
        api_key: key.to_string(),
        model: "test-model".to_string(),
        base_url: "http://localhost:9".to_string(),
    }
}

fn config(gemini: bool, openai: bool) -> RelayConfig {
    RelayConfig {
        port: 4000,
        cors_origin: "*".to_string(),
        gemini: gemini.then(|| settings("gk")),
        openai: openai.then(|| settings("ok")),
    }
}

fn sample_request() -> ChatRequest {
    let composed = compose("Why is the sky blue?", Tier::Class3, Some("science"));
    ChatRequest::new(composed.prompt, composed.params)
}

#[test]
fn gemini_request_uses_contents_parts_nesting() {
    let provider = GeminiProvider::with_model("key".to_string(), "gemini-2.5-flash".to_string());
    let request = sample_request();
    let body = provider.request_body(&request);

    assert_eq!(body["contents"][0]["role"], "user");
    assert_eq!(body["contents"][0]["parts"][0]["text"], request.prompt);
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 120);
    let top_p = body["generationConfig"]["topP"].as_f64().unwrap();
    assert!((top_p - 0.9).abs() < 1e-6);
    // The composed prompt rides through unmodified.
    assert!(
        body["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .contains("Why is the sky blue?")
    );
}

#[test]
fn openai_request_uses_messages_array() {
    let provider = OpenAiProvider::with_model("key".to_string(), "gpt-4o-mini".to_string());
    let request = sample_request();
    let body = provider.request_body(&request);

    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(body["messages"][0]["content"], request.prompt);
    assert_eq!(body["max_tokens"], 120);
}

#[test]
fn generation_config_follows_the_tier() {
    let provider = GeminiProvider::new("key".to_string());
    let composed = compose("q", Tier::Class10, None);
    let body = provider.request_body(&ChatRequest::new(composed.prompt, composed.params));
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 350);
}

#[test]
fn selection_prefers_gemini() {
    let provider = select_provider(&config(true, true)).unwrap();
    assert_eq!(provider.name(), "gemini");
}

#[test]
fn selection_falls_back_to_openai() {
    let provider = select_provider(&config(false, true)).unwrap();
    assert_eq!(provider.name(), "openai");
}

#[test]
fn selection_fails_without_credentials() {
    assert!(select_provider(&config(false, false)).is_err());
}

#[test]
fn selected_provider_reports_configured_model() {
    let provider = select_provider(&config(true, false)).unwrap();
    assert_eq!(provider.model(), "test-model");
}
