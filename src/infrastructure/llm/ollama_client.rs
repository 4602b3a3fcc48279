use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::ProviderDescriptor;
use crate::presentation::config::OllamaSettings;

use super::http::{build_http_client, ensure_success};

/// Local inference server speaking the Ollama `/api/generate` protocol.
pub struct OllamaClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
    #[serde(default)]
    error: Option<String>,
}

impl OllamaClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, LlmClientError> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_settings(settings: &OllamaSettings) -> Result<Self, LlmClientError> {
        Self::new(
            &settings.base_url,
            Duration::from_secs(settings.timeout_secs),
        )
    }
}

#[async_trait]
impl LlmClient for OllamaClient {
    #[tracing::instrument(skip(self, prompt), fields(model = %provider.identifier))]
    async fn complete(
        &self,
        prompt: &str,
        provider: &ProviderDescriptor,
    ) -> Result<String, LlmClientError> {
        let request_body = GenerateRequest {
            model: &provider.identifier,
            prompt,
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request_body)
            .send()
            .await?;

        let generated: GenerateResponse = ensure_success(response).await?.json().await?;

        if let Some(error) = generated.error {
            return Err(LlmClientError::Provider(error));
        }

        let text = generated.response.trim();
        if text.is_empty() {
            return Err(LlmClientError::Provider("empty completion".to_string()));
        }

        Ok(text.to_string())
    }
}
