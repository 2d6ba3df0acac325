//! Configuration for gene-briefer
//!
//! Endpoints, model and timeouts for the two remote collaborators. Values
//! come from built-in defaults, then `GENE_BRIEFER_*` environment variables,
//! then command-line flags.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

// ============================================================================
// Configuration Constants
// ============================================================================

/// UniProt REST base URL.
pub const DEFAULT_UNIPROT_URL: &str = "https://rest.uniprot.org";

/// Local Ollama server base URL.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Model requested when `--model` is not given.
pub const DEFAULT_MODEL: &str = "llama3";

/// Timeout for a single UniProt request in seconds.
/// Can be overridden via GENE_BRIEFER_UNIPROT_TIMEOUT_SECS.
pub const DEFAULT_UNIPROT_TIMEOUT_SECS: u64 = 30;

/// Timeout for a single completion request in seconds.
/// Local models can take minutes on CPU-only machines.
/// Can be overridden via GENE_BRIEFER_INFERENCE_TIMEOUT_SECS.
pub const DEFAULT_INFERENCE_TIMEOUT_SECS: u64 = 300;

pub const ENV_UNIPROT_URL: &str = "GENE_BRIEFER_UNIPROT_URL";
pub const ENV_OLLAMA_URL: &str = "GENE_BRIEFER_OLLAMA_URL";
pub const ENV_MODEL: &str = "GENE_BRIEFER_MODEL";
pub const ENV_UNIPROT_TIMEOUT: &str = "GENE_BRIEFER_UNIPROT_TIMEOUT_SECS";
pub const ENV_INFERENCE_TIMEOUT: &str = "GENE_BRIEFER_INFERENCE_TIMEOUT_SECS";

/// Runtime configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UniProt REST base URL
    pub uniprot_url: String,

    /// Inference server base URL
    pub ollama_url: String,

    /// Model identifier sent with every completion request
    pub model: String,

    /// Per-request timeout for UniProt, in seconds
    pub uniprot_timeout_secs: u64,

    /// Per-request timeout for the inference server, in seconds
    pub inference_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            uniprot_url: DEFAULT_UNIPROT_URL.to_string(),
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            uniprot_timeout_secs: DEFAULT_UNIPROT_TIMEOUT_SECS,
            inference_timeout_secs: DEFAULT_INFERENCE_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load config from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(url) = std::env::var(ENV_UNIPROT_URL) {
            config.uniprot_url = url;
        }

        if let Ok(url) = std::env::var(ENV_OLLAMA_URL) {
            config.ollama_url = url;
        }

        if let Ok(model) = std::env::var(ENV_MODEL) {
            config.model = model;
        }

        if let Ok(secs) = std::env::var(ENV_UNIPROT_TIMEOUT) {
            config.uniprot_timeout_secs = parse_timeout(ENV_UNIPROT_TIMEOUT, &secs)?;
        }

        if let Ok(secs) = std::env::var(ENV_INFERENCE_TIMEOUT) {
            config.inference_timeout_secs = parse_timeout(ENV_INFERENCE_TIMEOUT, &secs)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject settings that can never work.
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [("UniProt URL", &self.uniprot_url), ("inference URL", &self.ollama_url)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(CliError::config(format!(
                    "{} '{}' must start with http:// or https://",
                    name, url
                )));
            }
        }

        if self.model.trim().is_empty() {
            return Err(CliError::config("model name must not be empty"));
        }

        Ok(())
    }

    /// UniProt base URL without a trailing slash
    pub fn uniprot_url(&self) -> &str {
        self.uniprot_url.trim_end_matches('/')
    }

    /// Inference base URL without a trailing slash
    pub fn ollama_url(&self) -> &str {
        self.ollama_url.trim_end_matches('/')
    }

    pub fn uniprot_timeout(&self) -> Duration {
        Duration::from_secs(self.uniprot_timeout_secs)
    }

    pub fn inference_timeout(&self) -> Duration {
        Duration::from_secs(self.inference_timeout_secs)
    }
}

fn parse_timeout(var: &str, value: &str) -> Result<u64> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(CliError::config(format!(
            "{} must be a positive number of seconds, got '{}'",
            var, value
        ))),
    }
}
