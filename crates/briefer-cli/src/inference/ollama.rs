//! Ollama-compatible inference client

use crate::config::Config;
use crate::error::{InferenceError, Result};
use crate::inference::types::{ErrorResponse, GenerateRequest, GenerateResponse};
use crate::inference::InferenceBackend;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Build the completion endpoint URL
pub fn generate_url(base_url: &str) -> String {
    format!("{}/api/generate", base_url.trim_end_matches('/'))
}

/// Client for a local Ollama server
pub struct OllamaClient {
    client: Client,
    base_url: String,
}

impl OllamaClient {
    /// Create a new client with an explicit per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.ollama_url(), config.inference_timeout())
    }
}

#[async_trait]
impl InferenceBackend for OllamaClient {
    async fn complete(
        &self,
        prompt: &str,
        model: &str,
    ) -> std::result::Result<String, InferenceError> {
        let url = generate_url(&self.base_url);
        debug!(model = %model, prompt_chars = prompt.len(), "Requesting completion");

        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest::new(model, prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| body.trim().to_string());
            warn!(model = %model, status = %status, message = %message, "Inference request failed");

            if status == StatusCode::NOT_FOUND {
                return Err(InferenceError::ModelNotFound {
                    model: model.to_string(),
                });
            }

            return Err(InferenceError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let completion: GenerateResponse = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        debug!(
            model = %model,
            total_duration_ms = completion.total_duration.map(|ns| ns / 1_000_000),
            eval_count = completion.eval_count,
            "Completion received"
        );

        if completion.response.trim().is_empty() {
            return Err(InferenceError::EmptyCompletion);
        }

        Ok(completion.response)
    }
}
