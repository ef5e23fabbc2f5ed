//! # aula-core
//!
//! Core library for `aula`, the backend relay of a grade-adapted voice
//! tutor. The browser client collects a spoken or typed question; this
//! crate composes a tier-tuned instruction prompt, relays it to a
//! configured generative-text provider (Gemini preferred, OpenAI Chat
//! Completions as fallback), and normalizes the provider's weakly-typed
//! JSON response into a single plain-text reply for the client's speech
//! synthesizer.
//!
//! Modules:
//!
//! - `prompts/`: instructional tiers, per-tier generation parameters, and
//!   prompt assembly. Pure functions over static tables.
//! - `llm/`: provider clients, provider selection, and the shape-matching
//!   cascade that extracts reply text from arbitrary response envelopes.
//! - `server/`: the actix-web relay surface (`/`, `/api/chat`, `/api/tts`).
//! - `config/`: environment-driven configuration and constants.

pub mod config;
pub mod llm;
pub mod prompts;
pub mod server;

pub use config::RelayConfig;
pub use llm::{ChatProvider, ChatRequest, ExtractedReply, LlmError, extract_text};
pub use prompts::{ComposedPrompt, GenerationParams, Tier, compose};
