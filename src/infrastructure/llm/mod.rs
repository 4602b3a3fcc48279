mod gemini_client;
pub mod gemini_types;
mod http;
mod ollama_client;
mod provider_factory;

pub use gemini_client::GeminiClient;
pub use http::MAX_ERROR_BODY_CHARS;
pub use ollama_client::OllamaClient;
pub use provider_factory::ProviderFactory;
