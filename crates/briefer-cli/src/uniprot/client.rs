//! HTTP client for the UniProt REST API

use crate::config::Config;
use crate::error::{FetchError, Result};
use crate::uniprot::{endpoints, MetadataSource};
use async_trait::async_trait;
use briefer_common::Accession;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Longest error body excerpt kept in a [`FetchError::Status`].
const MAX_ERROR_BODY_CHARS: usize = 200;

/// UniProtKB client
pub struct UniProtClient {
    client: Client,
    base_url: String,
}

impl UniProtClient {
    /// Create a new client with an explicit per-request timeout
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("gene-briefer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.uniprot_url(), config.uniprot_timeout())
    }
}

#[async_trait]
impl MetadataSource for UniProtClient {
    async fn fetch_raw(&self, accession: &Accession) -> std::result::Result<Value, FetchError> {
        let url = endpoints::entry_url(&self.base_url, accession.as_str());
        debug!(accession = %accession, url = %url, "Fetching UniProt entry");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(accession = %accession, status = %status, "UniProt lookup failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: error_summary(&body),
            });
        }

        let body = response.text().await?;
        let value: Value =
            serde_json::from_str(&body).map_err(|e| FetchError::InvalidBody(e.to_string()))?;

        if !value.is_object() {
            return Err(FetchError::InvalidBody("expected a JSON object".to_string()));
        }

        debug!(accession = %accession, bytes = body.len(), "Fetched UniProt entry");
        Ok(value)
    }
}

/// Condense an error body into one line.
///
/// UniProt error responses carry a `messages` array; anything else is
/// truncated.
fn error_summary(body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        if let Some(Value::Array(messages)) = map.get("messages") {
            let joined = messages
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join("; ");
            if !joined.is_empty() {
                return joined;
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return "empty response body".to_string();
    }

    let mut excerpt: String = trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect();
    if trimmed.chars().count() > MAX_ERROR_BODY_CHARS {
        excerpt.push_str("...");
    }
    excerpt
}
