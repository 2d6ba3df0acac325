//! Ollama `/api/generate` request and response types

use serde::{Deserialize, Serialize};

/// Non-streaming completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
}

impl GenerateRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            stream: false,
        }
    }
}

/// Completion response; timing fields are only used for logging
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub model: Option<String>,

    pub response: String,

    #[serde(default)]
    pub done: bool,

    /// Total generation time in nanoseconds
    #[serde(default)]
    pub total_duration: Option<u64>,

    #[serde(default)]
    pub eval_count: Option<u64>,
}

/// Error body returned with non-success statuses
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
