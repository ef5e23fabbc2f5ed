//! API key retrieval from environment variables and .env files.
//!
//! Keys are read from the environment first; a `.env` file in the working
//! directory is loaded once at startup so local development does not need
//! exported variables.

use std::env;

use super::constants::env_vars;

/// Load environment variables from a `.env` file if one exists.
///
/// A missing file is not an error; any other load failure is reported as a
/// warning and otherwise ignored.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "loaded environment from .env");
        }
        Err(dotenvy::Error::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!("failed to load .env file: {}", e);
        }
    }
}

/// Read a non-empty environment variable.
fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.is_empty())
}

/// Gemini API key, with `GOOGLE_API_KEY` accepted as a fallback for
/// compatibility with older deployments.
pub fn gemini_api_key() -> Option<String> {
    non_empty_var(env_vars::GEMINI_API_KEY).or_else(|| non_empty_var(env_vars::GOOGLE_API_KEY))
}

/// OpenAI API key.
pub fn openai_api_key() -> Option<String> {
    non_empty_var(env_vars::OPENAI_API_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_var_rejects_empty_values() {
        unsafe {
            env::set_var("AULA_TEST_EMPTY_KEY", "");
        }
        assert_eq!(non_empty_var("AULA_TEST_EMPTY_KEY"), None);
        unsafe {
            env::remove_var("AULA_TEST_EMPTY_KEY");
        }
    }

    #[test]
    fn non_empty_var_reads_set_values() {
        unsafe {
            env::set_var("AULA_TEST_SET_KEY", "value-1");
        }
        assert_eq!(
            non_empty_var("AULA_TEST_SET_KEY"),
            Some("value-1".to_string())
        );
        unsafe {
            env::remove_var("AULA_TEST_SET_KEY");
        }
    }
}
