//! Best-effort text extraction from provider response envelopes.
//!
//! Upstream generative-text APIs do not share a response schema, and a
//! single provider can change shape between API versions. Rather than pin a
//! typed model per provider, extraction runs an ordered cascade of shape
//! rules over the raw JSON value. Each rule is total: an absent key at any
//! nesting depth means "this rule does not match", never an error.
//!
//! Rule order, first match wins:
//! 1. `candidates[0].content.parts[0].text` (Gemini)
//! 2. `outputs[0].content[0].text` (alternate Gemini-like nesting)
//! 3. top-level `text`, then `response.text`
//! 4. `choices[0].message.content`, else `choices[0].text` (chat completions)
//! 5. blank-line join of all `candidates[0].content.parts[*].text`
//! 6. serialization of the whole envelope
//!
//! The multi-part join runs after the cheap checks so the common
//! single-segment reply never pays for a full part scan.

use serde_json::Value;

/// Outcome of running the extraction cascade over a non-null envelope.
///
/// `Unrecognized` keeps "no known shape matched" distinct from a genuine
/// reply instead of passing raw JSON off as one; callers decide whether to
/// surface it or report an error. The carried string is the whole-envelope
/// serialization (cascade rule 6).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedReply {
    /// A recognized shape yielded a non-empty reply.
    Matched(String),
    /// No shape rule matched; carries the serialized envelope.
    Unrecognized(String),
}

impl ExtractedReply {
    pub fn as_text(&self) -> &str {
        match self {
            ExtractedReply::Matched(text) | ExtractedReply::Unrecognized(text) => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            ExtractedReply::Matched(text) | ExtractedReply::Unrecognized(text) => text,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, ExtractedReply::Matched(_))
    }
}

/// Extract the best plain-text reply from a provider envelope.
///
/// Returns `None` only for a null envelope ("no provider output"); every
/// other JSON value, however malformed, resolves to `Some` - either a
/// matched reply or the `Unrecognized` fallback. Never panics.
pub fn extract_text(envelope: &Value) -> Option<ExtractedReply> {
    if envelope.is_null() {
        return None;
    }

    let matched = first_candidate_part(envelope)
        .or_else(|| first_output_entry(envelope))
        .or_else(|| convenience_fields(envelope))
        .or_else(|| chat_completion_choice(envelope))
        .or_else(|| joined_candidate_parts(envelope));

    Some(match matched {
        Some(text) => ExtractedReply::Matched(text),
        None => ExtractedReply::Unrecognized(serialize_envelope(envelope)),
    })
}

/// A rule matches only on a non-empty, non-whitespace string.
fn trimmed_non_empty(value: &Value) -> Option<String> {
    value
        .as_str()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

fn first_candidate_part(envelope: &Value) -> Option<String> {
    trimmed_non_empty(&envelope["candidates"][0]["content"]["parts"][0]["text"])
}

fn first_output_entry(envelope: &Value) -> Option<String> {
    trimmed_non_empty(&envelope["outputs"][0]["content"][0]["text"])
}

fn convenience_fields(envelope: &Value) -> Option<String> {
    trimmed_non_empty(&envelope["text"]).or_else(|| trimmed_non_empty(&envelope["response"]["text"]))
}

fn chat_completion_choice(envelope: &Value) -> Option<String> {
    let choice = &envelope["choices"][0];
    let content = &choice["message"]["content"];
    // `text` is only consulted when `message.content` is absent, not when
    // it is present but blank.
    let field = if content.is_null() {
        &choice["text"]
    } else {
        content
    };
    trimmed_non_empty(field)
}

/// Recovers replies split across multiple parts, which rule 1 (first part
/// only) would truncate. Parts without a text field are skipped.
fn joined_candidate_parts(envelope: &Value) -> Option<String> {
    let parts = envelope["candidates"][0]["content"]["parts"].as_array()?;
    let joined = parts
        .iter()
        .filter_map(|part| part["text"].as_str())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");

    let trimmed = joined.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn serialize_envelope(envelope: &Value) -> String {
    serde_json::to_string(envelope).unwrap_or_else(|_| envelope.to_string())
}
