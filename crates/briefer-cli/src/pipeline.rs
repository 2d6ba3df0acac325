//! Per-accession briefing pipeline
//!
//! Accessions run one after another in input order:
//! fetch -> render -> infer -> assemble. Fetch and inference failures become
//! error entries; a template failure ends the run.

use crate::error::Result;
use crate::inference::{parse_completion, InferenceBackend};
use crate::output::{Failure, OutputDocument, SummaryResult};
use crate::progress::{report_failure, AccessionProgress};
use crate::prompt::PromptRenderer;
use crate::uniprot::MetadataSource;
use briefer_common::Accession;
use tracing::{info, info_span, warn, Instrument};

/// What to produce for each accession
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Model-generated summary
    #[default]
    Summarize,
    /// Database entry as fetched; no prompt, no inference
    Raw,
    /// Rendered prompt; no inference
    DryRun,
}

impl Mode {
    fn total_steps(self) -> usize {
        match self {
            Mode::Summarize => 3,
            Mode::DryRun => 2,
            Mode::Raw => 1,
        }
    }

    fn renders_prompts(self) -> bool {
        !matches!(self, Mode::Raw)
    }
}

/// Wires a metadata source, a renderer and an inference backend together
pub struct Pipeline<'a> {
    source: &'a dyn MetadataSource,
    backend: &'a dyn InferenceBackend,
    renderer: &'a PromptRenderer,
    model: String,
    show_progress: bool,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        source: &'a dyn MetadataSource,
        backend: &'a dyn InferenceBackend,
        renderer: &'a PromptRenderer,
        model: impl Into<String>,
    ) -> Self {
        Self {
            source,
            backend,
            renderer,
            model: model.into(),
            show_progress: false,
        }
    }

    /// Show a spinner per accession on standard error
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Process every accession and assemble the output document.
    ///
    /// The document has exactly one entry per input accession, in order.
    pub async fn run(&self, accessions: &[Accession], mode: Mode) -> Result<OutputDocument> {
        if mode.renders_prompts() {
            self.renderer.validate()?;
        }

        let total = accessions.len();
        let mut document = OutputDocument::new();

        for (index, accession) in accessions.iter().enumerate() {
            let span = info_span!("accession", accession = %accession, index = index + 1, total);
            let result = self.process(accession, mode).instrument(span).await?;

            if let SummaryResult::Failed(ref entry) = result {
                report_failure(accession, &entry.error);
            }

            document.push(accession.clone(), result);
        }

        info!(
            total,
            failed = document.failure_count(),
            mode = ?mode,
            "Pipeline finished"
        );

        Ok(document)
    }

    async fn process(&self, accession: &Accession, mode: Mode) -> Result<SummaryResult> {
        let progress = AccessionProgress::start(accession, mode.total_steps(), self.show_progress);
        let result = self.process_steps(accession, mode, &progress).await;
        progress.finish();
        result
    }

    async fn process_steps(
        &self,
        accession: &Accession,
        mode: Mode,
        progress: &AccessionProgress,
    ) -> Result<SummaryResult> {
        progress.step(1, "Fetching UniProt entry");

        if mode == Mode::Raw {
            return Ok(match self.source.fetch_raw(accession).await {
                Ok(raw) => SummaryResult::Raw(raw),
                Err(err) => {
                    warn!(error = %err, "Fetch failed");
                    SummaryResult::failed(Failure::from(&err))
                },
            });
        }

        let record = match self.source.fetch(accession).await {
            Ok(record) => record,
            Err(err) => {
                warn!(error = %err, "Fetch failed");
                return Ok(SummaryResult::failed(Failure::from(&err)));
            },
        };

        progress.step(2, "Rendering prompt");
        let prompt = self.renderer.render(&record)?;

        if mode == Mode::DryRun {
            return Ok(SummaryResult::Prompt(prompt.into_string()));
        }

        progress.step(3, &format!("Waiting for {}", self.model));
        match self.backend.complete(prompt.as_str(), &self.model).await {
            Ok(text) => Ok(SummaryResult::Summary(parse_completion(&text))),
            Err(err) => {
                warn!(error = %err, model = %self.model, "Inference failed");
                Ok(SummaryResult::failed(Failure::from(&err)))
            },
        }
    }
}
