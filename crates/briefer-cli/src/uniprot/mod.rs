//! Protein metadata retrieval
//!
//! [`MetadataSource`] is the seam the pipeline depends on; [`UniProtClient`]
//! is the production implementation backed by the UniProt REST API.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::UniProtClient;
pub use types::{parse_entry, UniProtEntry};

use crate::error::FetchError;
use async_trait::async_trait;
use briefer_common::{Accession, ProteinRecord};
use serde_json::Value;

/// Source of protein metadata, one accession at a time
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Fetch the database entry as returned by the server
    async fn fetch_raw(&self, accession: &Accession) -> Result<Value, FetchError>;

    /// Fetch and normalize the entry
    async fn fetch(&self, accession: &Accession) -> Result<ProteinRecord, FetchError> {
        let raw = self.fetch_raw(accession).await?;
        parse_entry(accession, raw)
    }
}
