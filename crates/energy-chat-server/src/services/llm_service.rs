use reqwest::Client;
use tracing::debug;

use crate::config::LlmConfig;
use crate::models::chat::{CompletionRequest, CompletionResponse};
use crate::services::conversation::LlmProvider;
use crate::utils::error::ApiError;

/// Client for an OpenAI-style chat completions endpoint.
#[derive(Clone)]
pub struct LlmService {
    client: Client,
    config: LlmConfig,
}

impl LlmService {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(config.timeout_seconds))
                .build()
                .expect("Failed to create HTTP client"),
            config,
        }
    }
}

#[async_trait::async_trait]
impl LlmProvider for LlmService {
    /// Send a single completion request upstream. One attempt, no retry.
    async fn complete(
        &self,
        request: &CompletionRequest,
    ) -> Result<CompletionResponse, ApiError> {
        debug!(
            "Sending completion request with {} messages",
            request.messages.len()
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::UpstreamError(format!("Failed to call LLM API: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::UpstreamError(format!(
                "LLM API error: {} - {}",
                status, body
            )));
        }

        response.json().await.map_err(|e| {
            ApiError::DeserializationError(format!("Failed to parse LLM response: {}", e))
        })
    }
}
