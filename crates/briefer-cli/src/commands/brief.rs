//! `gene-briefer <ACCESSION>...` implementation
//!
//! Resolves configuration, validates the inputs and the prompt template,
//! then runs the pipeline and writes the JSON document.

use crate::config::Config;
use crate::error::Result;
use crate::inference::OllamaClient;
use crate::pipeline::{Mode, Pipeline};
use crate::prompt::{MiniJinjaEngine, PromptRenderer, TemplateOrigin};
use crate::uniprot::UniProtClient;
use crate::Cli;
use briefer_common::types::resolve;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::{debug, info};

/// Options for one run, taken from the command line
#[derive(Debug, Clone, Default)]
pub struct BriefOptions {
    pub accessions: Vec<String>,
    pub mode: Mode,
    pub out: Option<PathBuf>,
    pub compact: bool,
    pub prompt_file: Option<PathBuf>,
    pub model: Option<String>,
    pub uniprot_url: Option<String>,
    pub ollama_url: Option<String>,
    pub show_progress: bool,
}

impl From<&Cli> for BriefOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            accessions: cli.accessions.clone(),
            mode: cli.mode(),
            out: cli.out.clone(),
            compact: cli.compact,
            prompt_file: cli.prompt_file.clone(),
            model: cli.model.clone(),
            uniprot_url: cli.uniprot_url.clone(),
            ollama_url: cli.ollama_url.clone(),
            show_progress: !cli.verbose && std::io::stderr().is_terminal(),
        }
    }
}

impl BriefOptions {
    /// Layer command-line values over the environment configuration
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = Config::from_env()?;

        if let Some(ref url) = self.uniprot_url {
            config.uniprot_url = url.clone();
        }
        if let Some(ref url) = self.ollama_url {
            config.ollama_url = url.clone();
        }
        if let Some(ref model) = self.model {
            config.model = model.clone();
        }

        config.validate()?;
        Ok(config)
    }

    fn renderer(&self) -> Result<PromptRenderer> {
        let renderer = match self.prompt_file {
            Some(ref path) => PromptRenderer::from_file(path, MiniJinjaEngine::new())?,
            None => PromptRenderer::builtin(MiniJinjaEngine::new()),
        };
        Ok(renderer)
    }
}

/// Brief every accession and emit the document
pub async fn run(options: BriefOptions) -> Result<()> {
    let accessions = resolve(options.accessions.iter().cloned())?;
    let config = options.resolve_config()?;
    let renderer = options.renderer()?;

    let template = match renderer.origin() {
        TemplateOrigin::Builtin => "builtin".to_string(),
        TemplateOrigin::File(path) => path.display().to_string(),
    };
    debug!(
        uniprot_url = config.uniprot_url(),
        ollama_url = config.ollama_url(),
        model = %config.model,
        template = %template,
        "Resolved configuration"
    );

    let source = UniProtClient::from_config(&config)?;
    let backend = OllamaClient::from_config(&config)?;

    info!(
        accessions = accessions.len(),
        mode = ?options.mode,
        model = %config.model,
        "Starting gene briefing"
    );

    let document = Pipeline::new(&source, &backend, &renderer, config.model.clone())
        .with_progress(options.show_progress)
        .run(&accessions, options.mode)
        .await?;

    document.emit(options.out.as_deref(), options.compact)?;

    info!(
        entries = document.len(),
        failed = document.failure_count(),
        "Gene briefing complete"
    );

    Ok(())
}
