use async_trait::async_trait;

use crate::application::ports::LlmClientError;
use crate::domain::ProviderDescriptor;

/// Lists the models a provider advertises for structured (JSON) output.
#[async_trait]
pub trait ModelCatalog: Send + Sync {
    async fn structured_output_models(&self) -> Result<Vec<ProviderDescriptor>, LlmClientError>;
}
