mod llm_client;
mod model_catalog;

pub use llm_client::{LlmClient, LlmClientError};
pub use model_catalog::ModelCatalog;
