//! Centralized constants so URLs, model IDs, and env var names are not
//! hardcoded throughout the codebase.

/// Upstream API endpoints
pub mod urls {
    pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
    pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
}

/// Default model IDs per provider
pub mod models {
    pub mod gemini {
        pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
    }

    pub mod openai {
        pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
    }
}

/// Environment variable names read by the relay
pub mod env_vars {
    pub const GEMINI_API_KEY: &str = "GEMINI_API_KEY";
    /// Accepted as a fallback for the Gemini key
    pub const GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
    pub const GEMINI_MODEL: &str = "GEMINI_MODEL";
    pub const GEMINI_API_URL: &str = "GEMINI_API_URL";
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
    pub const OPENAI_MODEL: &str = "OPENAI_MODEL";
    pub const OPENAI_API_URL: &str = "OPENAI_API_URL";
    pub const PORT: &str = "PORT";
    pub const CORS_ORIGIN: &str = "CORS_ORIGIN";
}

/// Server defaults
pub mod defaults {
    pub const PORT: u16 = 4000;
    pub const CORS_ORIGIN: &str = "*";
}
