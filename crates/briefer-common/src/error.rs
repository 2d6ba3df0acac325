//! Error types shared across gene-briefer crates

use thiserror::Error;

/// Result type alias for shared operations
pub type Result<T> = std::result::Result<T, BriefError>;

/// Main error type for the shared crate
#[derive(Error, Debug)]
pub enum BriefError {
    #[error("Invalid accession {0:?}: accessions must be non-empty")]
    InvalidAccession(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
