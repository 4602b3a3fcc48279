use async_trait::async_trait;

use crate::domain::ProviderDescriptor;

/// One completion call against one external inference endpoint.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        provider: &ProviderDescriptor,
    ) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("provider error: {0}")]
    Provider(String),
    #[error("rate limited")]
    RateLimited,
}

