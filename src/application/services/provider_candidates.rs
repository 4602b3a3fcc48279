use std::collections::HashSet;
use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt};

use crate::application::ports::ModelCatalog;
use crate::domain::ProviderDescriptor;

/// Ordered provider candidates: the configured list first, then models
/// discovered from the catalog. Discovery is only queried once the configured
/// list has been consumed.
pub struct ProviderCandidates {
    configured: Vec<ProviderDescriptor>,
    catalog: Option<Arc<dyn ModelCatalog>>,
}

impl ProviderCandidates {
    pub fn new(configured: Vec<ProviderDescriptor>) -> Self {
        Self {
            configured,
            catalog: None,
        }
    }

    pub fn with_discovery(mut self, catalog: Arc<dyn ModelCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn stream(&self) -> BoxStream<'_, ProviderDescriptor> {
        let configured = stream::iter(self.configured.iter().cloned());
        let discovered = stream::once(self.discover()).flat_map(stream::iter);
        configured.chain(discovered).boxed()
    }

    async fn discover(&self) -> Vec<ProviderDescriptor> {
        let Some(catalog) = &self.catalog else {
            return Vec::new();
        };

        let models = match catalog.structured_output_models().await {
            Ok(models) => models,
            Err(e) => {
                tracing::warn!(error = %e, "Model discovery failed");
                return Vec::new();
            }
        };

        let mut seen: HashSet<String> = self
            .configured
            .iter()
            .map(|p| p.identifier.clone())
            .collect();

        let discovered: Vec<ProviderDescriptor> = models
            .into_iter()
            .filter(|m| m.supports_structured_output)
            .filter(|m| seen.insert(m.identifier.clone()))
            .collect();

        tracing::info!(count = discovered.len(), "Discovered additional providers");
        discovered
    }
}
