use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::application::ports::{LlmClient, LlmClientError, ModelCatalog};
use crate::domain::ProviderDescriptor;
use crate::presentation::config::GeminiSettings;

use super::gemini_types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, JSON_MIME_TYPE,
    ListModelsResponse, SAFETY_FINISH_REASON, least_restrictive_safety_settings,
};
use super::http::{build_http_client, ensure_success};

const API_KEY_HEADER: &str = "x-goog-api-key";
const MAX_CATALOG_PAGES: usize = 10;

/// Hosted Gemini API. Each provider identifier is a model name.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, LlmClientError> {
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
        })
    }

    pub fn from_settings(settings: &GeminiSettings) -> Result<Self, LlmClientError> {
        Self::new(
            &settings.base_url,
            settings.api_key.clone(),
            Duration::from_secs(settings.timeout_secs),
        )
    }

    fn api_key(&self) -> Result<&str, LlmClientError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| LlmClientError::Provider("GEMINI_API_KEY is not configured".to_string()))
    }

    /// Model ids are spliced into the path, so anything that would change the
    /// path or start a query or fragment is refused.
    fn generate_content_url(&self, identifier: &str) -> Result<String, LlmClientError> {
        if identifier.is_empty() || identifier.contains(['/', '?', '#']) {
            return Err(LlmClientError::Provider(format!(
                "invalid model identifier: {:?}",
                identifier
            )));
        }
        Ok(format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, identifier
        ))
    }

    fn build_request(prompt: &str, provider: &ProviderDescriptor) -> GenerateContentRequest {
        let generation_config = GenerationConfig {
            response_mime_type: provider
                .supports_structured_output
                .then(|| JSON_MIME_TYPE.to_string()),
        };

        GenerateContentRequest {
            contents: vec![Content::user_text(prompt)],
            generation_config,
            safety_settings: least_restrictive_safety_settings(),
        }
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    #[tracing::instrument(skip(self, prompt), fields(model = %provider.identifier))]
    async fn complete(
        &self,
        prompt: &str,
        provider: &ProviderDescriptor,
    ) -> Result<String, LlmClientError> {
        let api_key = self.api_key()?;
        let request_body = Self::build_request(prompt, provider);

        let response = self
            .client
            .post(self.generate_content_url(&provider.identifier)?)
            .header(API_KEY_HEADER, api_key)
            .json(&request_body)
            .send()
            .await?;

        let generated: GenerateContentResponse = ensure_success(response).await?.json().await?;

        if let Some(reason) = generated
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            return Err(LlmClientError::Provider(format!("prompt blocked: {}", reason)));
        }

        let candidate = generated
            .candidates
            .first()
            .ok_or_else(|| LlmClientError::Provider("empty candidates".to_string()))?;

        if candidate.finish_reason.as_deref() == Some(SAFETY_FINISH_REASON) {
            return Err(LlmClientError::Provider(
                "response blocked by safety filter".to_string(),
            ));
        }

        let text = candidate.text();
        let text = text.trim();
        if text.is_empty() {
            return Err(LlmClientError::Provider("empty completion".to_string()));
        }

        Ok(text.to_string())
    }
}

#[async_trait]
impl ModelCatalog for GeminiClient {
    async fn structured_output_models(&self) -> Result<Vec<ProviderDescriptor>, LlmClientError> {
        let api_key = self.api_key()?;
        let mut descriptors = Vec::new();
        let mut page_token: Option<String> = None;

        for _ in 0..MAX_CATALOG_PAGES {
            let mut request = self
                .client
                .get(format!("{}/v1beta/models", self.base_url))
                .header(API_KEY_HEADER, api_key);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let page: ListModelsResponse = ensure_success(request.send().await?)
                .await?
                .json()
                .await?;

            descriptors.extend(
                page.models
                    .iter()
                    .filter(|m| m.supports_structured_output())
                    .map(|m| ProviderDescriptor::structured(m.identifier())),
            );

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        tracing::debug!(count = descriptors.len(), "Listed structured-output models");
        Ok(descriptors)
    }
}
