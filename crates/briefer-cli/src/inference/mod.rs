//! Local model inference
//!
//! [`InferenceBackend`] is the seam the pipeline depends on; [`OllamaClient`]
//! talks to an Ollama-compatible `/api/generate` endpoint.

pub mod completion;
pub mod ollama;
pub mod types;

pub use completion::parse_completion;
pub use ollama::OllamaClient;

use crate::error::InferenceError;
use async_trait::async_trait;

/// Produces a completion for a prompt
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Request a completion from `model`, returning the generated text
    async fn complete(&self, prompt: &str, model: &str) -> Result<String, InferenceError>;
}
