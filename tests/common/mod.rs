#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use classpulse::application::ports::{LlmClient, LlmClientError, ModelCatalog};
use classpulse::application::services::{FallbackOrchestrator, NotesService, ProviderCandidates};
use classpulse::domain::ProviderDescriptor;

pub const VALID_PAYLOAD: &str = r##"{"notes":"# Photosynthesis","teacher_score":{"score":8,"simplicity":7,"clarity":9,"examples":6,"feedback":"Clear."},"flashcards":[{"question":"What do plants make?","answer":"Glucose"}],"quiz":[{"question":"Where?","options":["Leaf","Root"],"answer":"Leaf"}]}"##;

#[derive(Clone)]
pub enum Outcome {
    Reply(String),
    Transport(String),
    Provider(String),
    RateLimited,
}

impl Outcome {
    fn into_result(self) -> Result<String, LlmClientError> {
        match self {
            Outcome::Reply(text) => Ok(text),
            Outcome::Transport(msg) => Err(LlmClientError::Transport(msg)),
            Outcome::Provider(msg) => Err(LlmClientError::Provider(msg)),
            Outcome::RateLimited => Err(LlmClientError::RateLimited),
        }
    }
}

/// Replies per provider identifier and records every call in order.
/// Unscripted providers fail with a transport error.
#[derive(Default)]
pub struct ScriptedLlmClient {
    outcomes: HashMap<String, Outcome>,
    calls: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, provider: &str, outcome: Outcome) -> Self {
        self.outcomes.insert(provider.to_string(), outcome);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LlmClient for ScriptedLlmClient {
    async fn complete(
        &self,
        prompt: &str,
        provider: &ProviderDescriptor,
    ) -> Result<String, LlmClientError> {
        self.calls.lock().unwrap().push(provider.identifier.clone());
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.outcomes
            .get(&provider.identifier)
            .cloned()
            .unwrap_or_else(|| Outcome::Transport("unscripted provider".to_string()))
            .into_result()
    }
}

pub struct StaticCatalog {
    models: Vec<ProviderDescriptor>,
    queries: Mutex<usize>,
}

impl StaticCatalog {
    pub fn new(models: Vec<ProviderDescriptor>) -> Self {
        Self {
            models,
            queries: Mutex::new(0),
        }
    }

    pub fn queries(&self) -> usize {
        *self.queries.lock().unwrap()
    }
}

#[async_trait::async_trait]
impl ModelCatalog for StaticCatalog {
    async fn structured_output_models(&self) -> Result<Vec<ProviderDescriptor>, LlmClientError> {
        *self.queries.lock().unwrap() += 1;
        Ok(self.models.clone())
    }
}

pub struct FailingCatalog;

#[async_trait::async_trait]
impl ModelCatalog for FailingCatalog {
    async fn structured_output_models(&self) -> Result<Vec<ProviderDescriptor>, LlmClientError> {
        Err(LlmClientError::Transport("catalog unreachable".to_string()))
    }
}

pub fn providers(identifiers: &[&str]) -> Vec<ProviderDescriptor> {
    identifiers
        .iter()
        .map(|id| ProviderDescriptor::structured(*id))
        .collect()
}

pub fn orchestrator(client: Arc<ScriptedLlmClient>, identifiers: &[&str]) -> FallbackOrchestrator {
    FallbackOrchestrator::new(client, ProviderCandidates::new(providers(identifiers)))
}

pub fn notes_service(client: Arc<ScriptedLlmClient>, identifiers: &[&str]) -> NotesService {
    NotesService::new(orchestrator(client, identifiers))
}
