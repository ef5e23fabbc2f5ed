//! Prompt assembly for the tutor persona.
//!
//! `compose` is a pure function: the same question, tier, and subject always
//! produce the same prompt and the same sampling parameters. The user's
//! question is embedded verbatim as the final segment and is never rewritten
//! or filtered here.

use super::tier::{GenerationParams, Tier};

const BASE_ROLE: &str = "You are \"Spidey Teacher\" - a warm, playful, and patient teacher who \
explains things clearly. Use age-appropriate vocabulary and tone.";

const FORMATTING_GUIDANCE: &str = "Do not use code blocks. If you use bullet points, keep them \
to 3 or fewer short bullets. Avoid raw Markdown symbols in the visible text (no ** or ##). Do \
not ask for additional follow-ups unless asked - keep the answer self-contained. Use friendly \
punctuation and short sentences for younger grades.";

const CLOSING_INSTRUCTION: &str = "Now answer the user's question below. Keep the answer within \
the length guidance for this grade and end with the short comprehension question as requested.";

/// Subject selector value meaning "no particular subject".
const SUBJECT_SENTINEL: &str = "general";

/// A fully assembled instruction prompt plus the sampling parameters for
/// its tier. The pair travels together so a prompt is never sent with
/// another tier's parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedPrompt {
    pub prompt: String,
    pub params: GenerationParams,
}

/// Build the instruction prompt for a question.
///
/// Segments are concatenated in fixed order, separated by blank lines;
/// empty optional segments are omitted entirely rather than left as stray
/// separators. A `subject` of `None` or the `"general"` sentinel adds no
/// subject clause.
pub fn compose(user_text: &str, tier: Tier, subject: Option<&str>) -> ComposedPrompt {
    let profile = tier.profile();

    let tier_line = format!(
        "Grade instructions: {}. Tone: {}. Vocabulary: {}. {}. {}",
        profile.label,
        profile.tone,
        profile.vocabulary,
        profile.sentence_advice,
        profile.length_limit
    );

    let subject_clause = subject
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != SUBJECT_SENTINEL)
        .map(|s| format!("Focus on the subject: {s}."));

    let examples_line = format!(
        "Instructions for examples: {}. {}",
        profile.examples_instruction, profile.check_question
    );

    let segments = [
        Some(BASE_ROLE.to_string()),
        Some(tier_line),
        subject_clause,
        Some(examples_line),
        Some(format!("Formatting rules: {FORMATTING_GUIDANCE}")),
        Some(CLOSING_INSTRUCTION.to_string()),
        Some(format!("User question: {user_text}")),
    ];

    let prompt = segments
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join("\n\n");

    ComposedPrompt {
        prompt,
        params: tier.generation_params(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const QUESTION: &str = "Why is the sky blue?";

    #[test]
    fn all_tiers_embed_the_question_verbatim() {
        for tier in [Tier::General, Tier::Class3, Tier::Class7, Tier::Class10] {
            let composed = compose(QUESTION, tier, None);
            assert!(composed.prompt.contains(QUESTION));
            assert!(composed.prompt.ends_with(&format!("User question: {QUESTION}")));
        }
    }

    #[test]
    fn markup_in_the_question_is_not_altered() {
        let tricky = "What does `let x = **y**;` do? ## heading";
        let composed = compose(tricky, Tier::Class7, None);
        assert!(composed.prompt.contains(tricky));
    }

    #[test]
    fn unknown_tier_matches_general() {
        let known = compose(QUESTION, Tier::General, Some("science"));
        let unknown = compose(QUESTION, Tier::parse("grade-99"), Some("science"));
        assert_eq!(known, unknown);
    }

    #[test]
    fn subject_sentinel_adds_no_clause() {
        for subject in [None, Some("general"), Some("  ")] {
            let composed = compose(QUESTION, Tier::Class3, subject);
            assert!(!composed.prompt.contains("Focus on the subject"));
        }
    }

    #[test]
    fn real_subject_adds_exactly_one_clause() {
        let composed = compose(QUESTION, Tier::Class10, Some("physics"));
        let clause = "Focus on the subject: physics.";
        assert_eq!(composed.prompt.matches(clause).count(), 1);
    }

    #[test]
    fn omitted_subject_leaves_no_stray_separators() {
        let composed = compose(QUESTION, Tier::General, None);
        assert!(!composed.prompt.contains("\n\n\n"));
    }

    #[test]
    fn tier_line_reflects_the_profile() {
        let composed = compose(QUESTION, Tier::Class3, None);
        assert!(composed.prompt.contains("Class 3 (about 8 years old)"));
        assert!(composed.prompt.contains("very friendly, playful, encouraging"));
    }

    #[test]
    fn params_follow_the_tier() {
        let composed = compose(QUESTION, Tier::Class10, None);
        assert_eq!(composed.params, Tier::Class10.generation_params());
    }
}
