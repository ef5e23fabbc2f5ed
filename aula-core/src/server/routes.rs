use actix_web::{HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};

use super::AppState;
use super::error::AppError;
use crate::llm::{ChatRequest, ExtractedReply, extract_text};
use crate::prompts::{Tier, compose};

/// Chat request body. `prompt` and `text` are accepted as aliases for
/// `question` so older clients keep working.
#[derive(Debug, Deserialize)]
pub struct ChatBody {
    #[serde(alias = "prompt", alias = "text")]
    question: Option<String>,
    tier: Option<String>,
    subject: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TtsBody {
    text: Option<String>,
}

/// `GET /` - liveness probe reporting which providers are configured.
pub async fn status(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "ok": true,
        "message": "aula relay is running",
        "provider": state.provider.name(),
        "providers": {
            "gemini": state.gemini_configured,
            "openai": state.openai_configured,
        },
    }))
}

/// `POST /api/chat` - compose a tier-adapted prompt, relay it upstream, and
/// return the normalized reply.
pub async fn chat(
    state: web::Data<AppState>,
    body: web::Json<ChatBody>,
) -> Result<HttpResponse, AppError> {
    let question = body
        .question
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or(AppError::EmptyQuestion)?;

    let tier = body
        .tier
        .as_deref()
        .map(Tier::parse)
        .unwrap_or_default();

    let composed = compose(question, tier, body.subject.as_deref());
    info!(
        provider = state.provider.name(),
        model = state.provider.model(),
        tier = tier.as_str(),
        prompt_len = composed.prompt.len(),
        "relaying chat request"
    );

    let request = ChatRequest::new(composed.prompt, composed.params);
    let envelope = state.provider.generate(&request).await?;

    match extract_text(&envelope) {
        None => Err(AppError::EmptyProviderResponse),
        Some(ExtractedReply::Matched(reply)) => Ok(HttpResponse::Ok().json(json!({
            "ok": true,
            "reply": reply,
        }))),
        Some(ExtractedReply::Unrecognized(raw)) => {
            warn!(envelope = %raw, "no recognized shape in provider response");
            Err(AppError::UnrecognizedReply)
        }
    }
}

/// `POST /api/tts` - placeholder; the browser's speechSynthesis handles TTS
/// in the MVP, so a server-side provider is deliberately not implemented.
pub async fn tts(body: web::Json<TtsBody>) -> Result<HttpResponse, AppError> {
    body.text
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(AppError::EmptyText)?;

    Ok(HttpResponse::NotImplemented().json(json!({
        "ok": false,
        "error": "TTS provider not configured on backend.",
        "suggestion": "Use the browser speechSynthesis for now.",
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::dev::ServiceResponse;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::llm::{ChatProvider, ChatRequest, LlmError};

    /// Provider stub that returns a fixed envelope without any network.
    struct CannedProvider(Value);

    #[async_trait]
    impl ChatProvider for CannedProvider {
        fn name(&self) -> &str {
            "canned"
        }

        fn model(&self) -> &str {
            "canned-model"
        }

        async fn generate(&self, _request: &ChatRequest) -> Result<Value, LlmError> {
            Ok(self.0.clone())
        }
    }

    fn state(envelope: Value) -> web::Data<AppState> {
        web::Data::new(AppState {
            provider: Arc::new(CannedProvider(envelope)),
            gemini_configured: true,
            openai_configured: false,
        })
    }

    async fn post_chat(envelope: Value, body: Value) -> ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(state(envelope))
                .route("/api/chat", web::post().to(chat)),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/chat")
            .set_json(body)
            .to_request();
        test::call_service(&app, req).await
    }

    fn gemini_envelope(text: &str) -> Value {
        json!({"candidates": [{"content": {"parts": [{"text": text}]}}]})
    }

    #[actix_web::test]
    async fn missing_question_is_a_client_error() {
        let resp = post_chat(gemini_envelope("unused"), json!({"tier": "class3"})).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["ok"], false);
        assert!(body["error"].as_str().unwrap_or_default().contains("question"));
    }

    #[actix_web::test]
    async fn whitespace_question_is_a_client_error() {
        let resp = post_chat(gemini_envelope("unused"), json!({"question": "   "})).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn question_field_yields_the_normalized_reply() {
        let resp = post_chat(gemini_envelope("  Hello!  "), json!({"question": "hi"})).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["ok"], true);
        assert_eq!(body["reply"], "Hello!");
    }

    #[actix_web::test]
    async fn prompt_alias_is_accepted() {
        let resp = post_chat(gemini_envelope("Aliased"), json!({"prompt": "hi"})).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn text_alias_is_accepted() {
        let resp = post_chat(gemini_envelope("Aliased"), json!({"text": "hi"})).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn unrecognized_envelope_is_a_gateway_error() {
        let resp = post_chat(json!({"foo": "bar"}), json!({"question": "hi"})).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["ok"], false);
    }

    #[actix_web::test]
    async fn tts_placeholder_reports_not_implemented() {
        let app = test::init_service(
            App::new().route("/api/tts", web::post().to(tts)),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/tts")
            .set_json(json!({"text": "read this aloud"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_IMPLEMENTED);
    }
}
