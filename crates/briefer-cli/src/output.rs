//! Output document assembly
//!
//! The document is a JSON object keyed by accession in input order. Keys are
//! written one by one rather than collected into a map, so a duplicated
//! accession appears once per occurrence.

use crate::error::{FetchError, InferenceError, Result};
use briefer_common::Accession;
use colored::Colorize;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use serde_json::Value;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Which stage failed for an accession
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    Fetch,
    Inference,
}

/// Recorded per-accession failure
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failure {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&FetchError> for Failure {
    fn from(err: &FetchError) -> Self {
        Self {
            kind: FailureKind::Fetch,
            message: err.to_string(),
        }
    }
}

impl From<&InferenceError> for Failure {
    fn from(err: &InferenceError) -> Self {
        Self {
            kind: FailureKind::Inference,
            message: err.to_string(),
        }
    }
}

/// `{"error": {...}}` wrapper
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorEntry {
    pub error: Failure,
}

/// Outcome for one accession
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SummaryResult {
    /// Parsed (or verbatim) model completion
    Summary(Value),
    /// Database entry as fetched
    Raw(Value),
    /// Rendered prompt, when inference is skipped
    Prompt(String),
    Failed(ErrorEntry),
}

impl SummaryResult {
    pub fn failed(failure: Failure) -> Self {
        Self::Failed(ErrorEntry { error: failure })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Ordered accession -> result document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputDocument {
    entries: Vec<(Accession, SummaryResult)>,
}

impl OutputDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, accession: Accession, result: SummaryResult) {
        self.entries.push((accession, result));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(Accession, SummaryResult)] {
        &self.entries
    }

    pub fn failure_count(&self) -> usize {
        self.entries.iter().filter(|(_, r)| r.is_failure()).count()
    }

    /// Serialize with two-space indentation, or without any whitespace
    pub fn to_json(&self, compact: bool) -> Result<String> {
        let json = if compact {
            serde_json::to_string(self)?
        } else {
            serde_json::to_string_pretty(self)?
        };
        Ok(json)
    }

    /// Write the document to `path`, or to standard output when `None`
    pub fn emit(&self, path: Option<&Path>, compact: bool) -> Result<()> {
        let json = self.to_json(compact)?;

        match path {
            Some(path) => {
                std::fs::write(path, format!("{}\n", json))?;
                info!(path = %path.display(), entries = self.len(), "Output written");
                eprintln!(
                    "{} Saved {} to {}",
                    "✓".green(),
                    pluralize(self.len(), "entry", "entries"),
                    path.display().to_string().cyan()
                );
            },
            None => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", json)?;
                stdout.flush()?;
            },
        }

        Ok(())
    }
}

impl Serialize for OutputDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (accession, result) in &self.entries {
            map.serialize_entry(accession.as_str(), result)?;
        }
        map.end()
    }
}

fn pluralize(count: usize, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{} {}", count, one)
    } else {
        format!("{} {}", count, many)
    }
}
