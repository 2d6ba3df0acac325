//! gene-briefer common library
//!
//! Shared types, error handling and logging for the gene-briefer workspace.
//!
//! - **Types**: [`types::Accession`] and [`types::ProteinRecord`]
//! - **Error Handling**: [`BriefError`] and the [`Result`] alias
//! - **Logging**: `tracing` subscriber setup in [`logging`]
//!
//! # Example
//!
//! ```
//! use briefer_common::types::{resolve, ProteinRecord};
//!
//! let accessions = resolve(["P04637", "Q9T0Q8"]).unwrap();
//! assert_eq!(accessions.len(), 2);
//!
//! let record = ProteinRecord::default();
//! assert_eq!(record.primary_gene(), "N/A");
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{BriefError, Result};
pub use types::{Accession, ProteinRecord};
