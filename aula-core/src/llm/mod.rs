//! Upstream LLM integration: provider clients, selection, and response
//! normalization.

pub mod extract;
pub mod factory;
pub mod provider;
pub mod providers;

pub use extract::{ExtractedReply, extract_text};
pub use factory::{create_provider, select_provider};
pub use provider::{ChatProvider, ChatRequest, LlmError};
pub use providers::{GeminiProvider, OpenAiProvider};
