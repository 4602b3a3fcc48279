mod environment;
mod settings;

pub use environment::{ENVIRONMENT_VAR, Environment};
pub use settings::{
    FrontendSettings, GEMINI_API_KEY_VAR, GeminiSettings, LlmProvider, LlmSettings,
    OllamaSettings, ServerSettings, Settings,
};
