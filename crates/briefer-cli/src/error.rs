//! Error types for the gene-briefer CLI
//!
//! [`CliError`] is fatal and ends the run with a non-zero exit code.
//! [`FetchError`] and [`InferenceError`] belong to a single accession: the
//! pipeline records them in the output document and moves on.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Fatal error for the whole run
///
/// All messages are user-facing with a short suggestion.
#[derive(Error, Debug)]
pub enum CliError {
    /// Prompt template could not be loaded or rendered
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// An accession failed basic validation
    #[error("{0}. Pass one or more UniProt accessions, e.g. 'gene-briefer P04637'.")]
    InvalidAccession(#[from] briefer_common::BriefError),

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your command-line flags and GENE_BRIEFER_* environment variables.")]
    Config(String),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// Output serialization failed
    #[error("Failed to serialize JSON output: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP client could not be constructed
    #[error("Failed to set up HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Failure to load or apply the prompt template
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Cannot read prompt template '{}': {source}. Verify the path passed to --prompt-file.", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed prompt template: {0}")]
    Syntax(String),

    #[error("Prompt template references an unknown field: {0}")]
    UnknownField(String),

    #[error("Failed to render prompt template: {0}")]
    Render(String),
}

/// Failure to retrieve metadata for one accession
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("UniProt request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("UniProt returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("UniProt returned an invalid JSON body: {0}")]
    InvalidBody(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err)
    }
}

/// Failure to obtain a completion for one accession
#[derive(Error, Debug)]
pub enum InferenceError {
    #[error("Inference server unreachable: {0}. Ensure the local model server is running.")]
    Unreachable(#[source] reqwest::Error),

    #[error("Model '{model}' is not available on the inference server. Pull it first (e.g. 'ollama pull {model}') or choose another with --model.")]
    ModelNotFound { model: String },

    #[error("Inference server returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Inference server returned an unexpected response: {0}")]
    InvalidResponse(String),

    #[error("Model returned an empty completion")]
    EmptyCompletion,
}

impl From<reqwest::Error> for InferenceError {
    fn from(err: reqwest::Error) -> Self {
        Self::Unreachable(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_error_is_fatal_cli_error() {
        let err: CliError = TemplateError::UnknownField("undefined value `tissue`".into()).into();
        assert!(matches!(err, CliError::Template(_)));
        assert!(err.to_string().contains("unknown field"));
    }

    #[test]
    fn test_unreadable_template_message_names_path() {
        let err = TemplateError::Unreadable {
            path: PathBuf::from("/nope/prompt.j2"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().contains("/nope/prompt.j2"));
    }

    #[test]
    fn test_model_not_found_message() {
        let err = InferenceError::ModelNotFound {
            model: "mistral".into(),
        };
        assert!(err.to_string().contains("'mistral'"));
        assert!(err.to_string().contains("--model"));
    }

    #[test]
    fn test_status_messages() {
        let fetch = FetchError::Status {
            status: 404,
            body: "not found".into(),
        };
        assert_eq!(fetch.to_string(), "UniProt returned HTTP 404: not found");

        let infer = InferenceError::Status {
            status: 500,
            message: "boom".into(),
        };
        assert_eq!(infer.to_string(), "Inference server returned HTTP 500: boom");
    }
}
