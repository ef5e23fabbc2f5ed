//! Instructional tiers and their static prompt/generation profiles.
//!
//! Each tier fixes how an answer should read (vocabulary, tone, length) and
//! how it should be sampled (temperature, output cap, nucleus threshold).
//! The tables are static: nothing here is learned or mutated at runtime.

use serde::{Deserialize, Serialize};

/// Audience grade for a generated answer.
///
/// Unknown or missing selector values map to [`Tier::General`]; there is
/// deliberately no error path for a bad tier string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    General,
    Class3,
    Class7,
    Class10,
}

impl Default for Tier {
    fn default() -> Self {
        Tier::General
    }
}

impl Tier {
    /// Parse a tier selector, falling back to `General` for anything
    /// unrecognized.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "class3" => Tier::Class3,
            "class7" => Tier::Class7,
            "class10" => Tier::Class10,
            _ => Tier::General,
        }
    }

    /// Stable key for logs and wire payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::General => "general",
            Tier::Class3 => "class3",
            Tier::Class7 => "class7",
            Tier::Class10 => "class10",
        }
    }

    /// Instructional profile driving prompt assembly.
    pub fn profile(&self) -> &'static TierProfile {
        match self {
            Tier::General => &GENERAL_PROFILE,
            Tier::Class3 => &CLASS3_PROFILE,
            Tier::Class7 => &CLASS7_PROFILE,
            Tier::Class10 => &CLASS10_PROFILE,
        }
    }

    /// Sampling parameters tuned for this tier.
    pub fn generation_params(&self) -> GenerationParams {
        match self {
            Tier::General => GenerationParams {
                temperature: 0.25,
                max_output_tokens: 220,
                top_p: 0.9,
            },
            Tier::Class3 => GenerationParams {
                temperature: 0.20,
                max_output_tokens: 120,
                top_p: 0.9,
            },
            Tier::Class7 => GenerationParams {
                temperature: 0.25,
                max_output_tokens: 220,
                top_p: 0.9,
            },
            Tier::Class10 => GenerationParams {
                temperature: 0.30,
                max_output_tokens: 350,
                top_p: 0.9,
            },
        }
    }
}

/// How an answer for a given tier should be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierProfile {
    pub label: &'static str,
    pub tone: &'static str,
    pub vocabulary: &'static str,
    pub sentence_advice: &'static str,
    pub length_limit: &'static str,
    pub examples_instruction: &'static str,
    pub check_question: &'static str,
}

/// Sampling parameters sent to the upstream provider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub top_p: f32,
}

static GENERAL_PROFILE: TierProfile = TierProfile {
    label: "General audience",
    tone: "friendly and clear",
    vocabulary: "plain",
    sentence_advice: "short sentences; avoid technical jargon",
    length_limit: "Keep answers concise.",
    examples_instruction: "Use a simple example if helpful.",
    check_question: "Ask one brief question at the end to check understanding.",
};

static CLASS3_PROFILE: TierProfile = TierProfile {
    label: "Class 3 (about 8 years old)",
    tone: "very friendly, playful, encouraging",
    vocabulary: "very simple; words a child in class 3 knows",
    sentence_advice: "use short sentences and simple phrases (1-2 short sentences per idea)",
    length_limit: "Keep responses very short - about 30-70 words (one short paragraph).",
    examples_instruction: "Use a relatable analogy (toys, pets, school) and one short example.",
    check_question: "Finish with a single simple question (yes/no or one-word answer).",
};

static CLASS7_PROFILE: TierProfile = TierProfile {
    label: "Class 7 (about 13 years old)",
    tone: "friendly, slightly more explanatory",
    vocabulary: "everyday vocabulary with a few new words explained",
    sentence_advice: "short paragraphs (2-3 sentences each); introduce one new idea at a time",
    length_limit: "Keep responses concise - about 80-140 words (1-2 short paragraphs).",
    examples_instruction: "Use a clear example and one analogy (everyday life or simple science).",
    check_question: "Ask one quick comprehension question (multiple-choice or short answer).",
};

static CLASS10_PROFILE: TierProfile = TierProfile {
    label: "Class 10 (about 15-16 years old)",
    tone: "clear, slightly formal but friendly, explanatory",
    vocabulary: "use proper subject vocabulary but define terms briefly",
    sentence_advice: "use 2-3 short paragraphs; allow slightly longer sentences",
    length_limit: "Keep responses focused - about 120-250 words as needed.",
    examples_instruction: "Give an example or small step-by-step explanation; show one mini-analogy.",
    check_question: "Ask one short comprehension or application question.",
};
