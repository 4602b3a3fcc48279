use std::sync::Arc;
use std::time::Duration;

use futures::stream::StreamExt;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::application::services::ProviderCandidates;
use crate::domain::GenerationResult;

/// Tries providers one at a time, in candidate order, until one returns a
/// completion. Attempt `n` (zero-based) waits `n * backoff` before starting.
pub struct FallbackOrchestrator {
    client: Arc<dyn LlmClient>,
    candidates: ProviderCandidates,
    backoff: Duration,
}

impl FallbackOrchestrator {
    pub fn new(client: Arc<dyn LlmClient>, candidates: ProviderCandidates) -> Self {
        Self {
            client,
            candidates,
            backoff: Duration::ZERO,
        }
    }

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    pub async fn generate(&self, prompt: &str) -> Result<GenerationResult, FallbackError> {
        let mut candidates = self.candidates.stream();
        let mut last_failure: Option<(String, LlmClientError)> = None;
        let mut attempts: u32 = 0;

        while let Some(provider) = candidates.next().await {
            if attempts > 0 && !self.backoff.is_zero() {
                let delay = self.backoff * attempts;
                tracing::debug!(
                    delay_ms = delay.as_millis() as u64,
                    "Backing off before next provider"
                );
                tokio::time::sleep(delay).await;
            }
            attempts += 1;

            tracing::debug!(provider = %provider, attempt = attempts, "Calling provider");

            match self.client.complete(prompt, &provider).await {
                Ok(raw_text) => {
                    tracing::info!(
                        provider = %provider,
                        attempt = attempts,
                        response_len = raw_text.len(),
                        "Provider succeeded"
                    );
                    return Ok(GenerationResult::new(provider.identifier, raw_text));
                }
                Err(e) => {
                    tracing::warn!(provider = %provider, error = %e, "Provider failed");
                    last_failure = Some((provider.identifier, e));
                }
            }
        }

        match last_failure {
            Some((provider, source)) => Err(FallbackError::Exhausted {
                provider,
                attempts,
                source,
            }),
            None => Err(FallbackError::NoProviderAvailable),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FallbackError {
    #[error("no provider available")]
    NoProviderAvailable,
    #[error("all {attempts} provider attempts failed, last from {provider}: {source}")]
    Exhausted {
        provider: String,
        attempts: u32,
        #[source]
        source: LlmClientError,
    },
}
