use std::time::Duration;

use reqwest::{Client, Response, StatusCode};

use crate::application::ports::LlmClientError;

/// Upstream error bodies are cut to this many chars before they reach an
/// error message.
pub const MAX_ERROR_BODY_CHARS: usize = 512;

impl From<reqwest::Error> for LlmClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() || e.is_connect() || e.is_request() {
            LlmClientError::Transport(e.to_string())
        } else {
            LlmClientError::Provider(e.to_string())
        }
    }
}

/// Every provider call goes through a client with a hard timeout.
pub(super) fn build_http_client(timeout: Duration) -> Result<Client, LlmClientError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| LlmClientError::Transport(e.to_string()))
}

pub(super) async fn ensure_success(response: Response) -> Result<Response, LlmClientError> {
    if response.status() == StatusCode::TOO_MANY_REQUESTS {
        return Err(LlmClientError::RateLimited);
    }

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(LlmClientError::Provider(format!(
            "HTTP {}: {}",
            status,
            truncate_body(&body)
        )));
    }

    Ok(response)
}

fn truncate_body(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((cut, _)) => format!("{}... (truncated)", &body[..cut]),
        None => body.to_string(),
    }
}
