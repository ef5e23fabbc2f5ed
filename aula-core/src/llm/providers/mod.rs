mod gemini;
mod openai;

pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;
