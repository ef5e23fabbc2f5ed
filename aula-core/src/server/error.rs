use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

use crate::llm::LlmError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("missing 'question' in request body")]
    EmptyQuestion,

    #[error("missing 'text' in request body")]
    EmptyText,

    #[error("provider returned no output")]
    EmptyProviderResponse,

    #[error("provider returned an unrecognized response shape")]
    UnrecognizedReply,

    #[error(transparent)]
    Upstream(#[from] LlmError),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::EmptyQuestion | AppError::EmptyText => StatusCode::BAD_REQUEST,
            AppError::EmptyProviderResponse | AppError::UnrecognizedReply => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Upstream(err) => match err {
                LlmError::MissingCredentials => StatusCode::SERVICE_UNAVAILABLE,
                LlmError::RateLimit => StatusCode::TOO_MANY_REQUESTS,
                LlmError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
                LlmError::Network(_) | LlmError::Provider(_) => StatusCode::BAD_GATEWAY,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "ok": false,
            "error": self.to_string(),
        }))
    }
}
