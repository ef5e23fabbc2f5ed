//! Prompt composition: tier profiles, generation parameters, and the
//! assembly of the tutor instruction prompt.

pub mod composer;
pub mod tier;

pub use composer::{ComposedPrompt, compose};
pub use tier::{GenerationParams, Tier, TierProfile};
