//! gene-briefer CLI Library
//!
//! Turns UniProt accessions into short, structured gene briefings.
//!
//! # Overview
//!
//! For every accession, in the order given:
//!
//! - **Fetch**: Retrieve the UniProtKB entry (`uniprot`)
//! - **Render**: Fill the prompt template from the entry (`prompt`)
//! - **Infer**: Ask a locally hosted model for a completion (`inference`)
//! - **Assemble**: Key the parsed result by accession (`output`)
//!
//! `--raw` stops after the fetch and `--dry-run` after the render.

pub mod commands;
pub mod config;
pub mod error;
pub mod inference;
pub mod output;
pub mod pipeline;
pub mod progress;
pub mod prompt;
pub mod uniprot;

// Re-export commonly used types
pub use config::Config;
pub use error::{CliError, Result};
pub use output::{OutputDocument, SummaryResult};
pub use pipeline::{Mode, Pipeline};

use clap::Parser;
use std::path::PathBuf;

/// gene-briefer - Gene summaries from UniProt and a local LLM
#[derive(Parser, Debug)]
#[command(name = "gene-briefer")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// UniProt accessions to brief (e.g. P04637 Q9T0Q8)
    #[arg(required_unless_present = "markdown_help")]
    pub accessions: Vec<String>,

    /// Emit the UniProt entries as fetched, without calling the model
    #[arg(long)]
    pub raw: bool,

    /// Render prompts and emit them instead of calling the model
    #[arg(long, conflicts_with = "raw")]
    pub dry_run: bool,

    /// Write the JSON document to a file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Emit JSON without indentation
    #[arg(long)]
    pub compact: bool,

    /// Jinja template used instead of the built-in prompt
    #[arg(long, value_name = "FILE")]
    pub prompt_file: Option<PathBuf>,

    /// Model served by the inference server [default: llama3]
    #[arg(short, long, env = "GENE_BRIEFER_MODEL")]
    pub model: Option<String>,

    /// UniProt REST base URL [default: https://rest.uniprot.org]
    #[arg(long, env = "GENE_BRIEFER_UNIPROT_URL")]
    pub uniprot_url: Option<String>,

    /// Inference server base URL [default: http://localhost:11434]
    #[arg(long, env = "GENE_BRIEFER_OLLAMA_URL")]
    pub ollama_url: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Print help as markdown
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

impl Cli {
    /// Pipeline mode selected by the flags
    pub fn mode(&self) -> Mode {
        if self.raw {
            Mode::Raw
        } else if self.dry_run {
            Mode::DryRun
        } else {
            Mode::Summarize
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_accessions_and_flags() {
        let cli = Cli::try_parse_from([
            "gene-briefer",
            "P04637",
            "Q9T0Q8",
            "--compact",
            "-o",
            "out.json",
            "-m",
            "mistral",
        ])
        .unwrap();

        assert_eq!(cli.accessions, vec!["P04637", "Q9T0Q8"]);
        assert!(cli.compact);
        assert_eq!(cli.out, Some(PathBuf::from("out.json")));
        assert_eq!(cli.model.as_deref(), Some("mistral"));
        assert_eq!(cli.mode(), Mode::Summarize);
    }

    #[test]
    fn test_mode_selection() {
        let cli = Cli::try_parse_from(["gene-briefer", "P04637", "--raw"]).unwrap();
        assert_eq!(cli.mode(), Mode::Raw);

        let cli = Cli::try_parse_from(["gene-briefer", "P04637", "--dry-run"]).unwrap();
        assert_eq!(cli.mode(), Mode::DryRun);
    }

    #[test]
    fn test_raw_conflicts_with_dry_run() {
        assert!(Cli::try_parse_from(["gene-briefer", "P04637", "--raw", "--dry-run"]).is_err());
    }

    #[test]
    fn test_accessions_required() {
        assert!(Cli::try_parse_from(["gene-briefer", "--compact"]).is_err());
        assert!(Cli::try_parse_from(["gene-briefer", "--markdown-help"]).is_ok());
    }
}
