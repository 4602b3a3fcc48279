use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::LlmClientError;
use crate::application::services::{FallbackOrchestrator, ProviderCandidates};
use crate::domain::ProviderDescriptor;
use crate::presentation::config::{LlmProvider, LlmSettings};

use super::gemini_client::GeminiClient;
use super::ollama_client::OllamaClient;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Builds the client and the ordered provider list for the configured
    /// backend. Called once at startup.
    pub fn create_orchestrator(
        settings: &LlmSettings,
    ) -> Result<FallbackOrchestrator, LlmClientError> {
        let backoff = Duration::from_millis(settings.backoff_ms);

        let orchestrator = match settings.provider {
            LlmProvider::Ollama => {
                let client = OllamaClient::from_settings(&settings.ollama)?;
                let candidates = ProviderCandidates::new(vec![ProviderDescriptor::plain_text(
                    &settings.ollama.model,
                )]);
                FallbackOrchestrator::new(Arc::new(client), candidates)
            }
            LlmProvider::Gemini => {
                let gemini = &settings.gemini;
                let client = Arc::new(GeminiClient::from_settings(gemini)?);
                let configured = gemini
                    .models
                    .iter()
                    .map(|model| ProviderDescriptor::new(model, gemini.structured_output))
                    .collect();

                let mut candidates = ProviderCandidates::new(configured);
                if gemini.discovery_enabled {
                    candidates = candidates.with_discovery(client.clone());
                }
                FallbackOrchestrator::new(client, candidates)
            }
        };

        tracing::info!(
            provider = %settings.provider,
            backoff_ms = settings.backoff_ms,
            "LLM provider configured"
        );
        Ok(orchestrator.with_backoff(backoff))
    }
}
