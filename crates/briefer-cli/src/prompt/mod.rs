//! Prompt rendering
//!
//! A [`PromptRenderer`] owns one template (built-in or from `--prompt-file`)
//! shared by every accession of a run, and a [`TemplateEngine`] that fills
//! it from a [`ProteinRecord`].

pub mod engine;
pub mod template;

pub use engine::{MiniJinjaEngine, TemplateEngine};
pub use template::DEFAULT_TEMPLATE;

use crate::error::TemplateError;
use briefer_common::ProteinRecord;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Rendered prompt for one accession
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptText(String);

impl PromptText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Where the active template came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOrigin {
    Builtin,
    File(PathBuf),
}

/// Template plus the engine that renders it
pub struct PromptRenderer {
    engine: Box<dyn TemplateEngine>,
    template: String,
    origin: TemplateOrigin,
}

impl PromptRenderer {
    /// Renderer using [`DEFAULT_TEMPLATE`]
    pub fn builtin(engine: impl TemplateEngine + 'static) -> Self {
        Self {
            engine: Box::new(engine),
            template: DEFAULT_TEMPLATE.to_string(),
            origin: TemplateOrigin::Builtin,
        }
    }

    /// Renderer using a template read from `path`
    pub fn from_file(
        path: impl AsRef<Path>,
        engine: impl TemplateEngine + 'static,
    ) -> Result<Self, TemplateError> {
        let path = path.as_ref();
        let template = std::fs::read_to_string(path).map_err(|source| TemplateError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = template.len(), "Loaded prompt template");

        Ok(Self {
            engine: Box::new(engine),
            template,
            origin: TemplateOrigin::File(path.to_path_buf()),
        })
    }

    /// Renderer using an in-memory template
    pub fn from_template(template: impl Into<String>, engine: impl TemplateEngine + 'static) -> Self {
        Self {
            engine: Box::new(engine),
            template: template.into(),
            origin: TemplateOrigin::Builtin,
        }
    }

    pub fn origin(&self) -> &TemplateOrigin {
        &self.origin
    }

    /// Check the template before any accession is processed.
    ///
    /// Every name the template reads, in any branch, must be a record field.
    /// A render against a fully populated record then catches the remaining
    /// runtime errors.
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.template.trim().is_empty() {
            return Err(TemplateError::Syntax("template is empty".to_string()));
        }

        let probe = probe_record();
        let fields = probe
            .template_fields()
            .map_err(|e| TemplateError::Render(e.to_string()))?;

        let unknown: Vec<String> = self
            .engine
            .referenced_fields(&self.template)?
            .into_iter()
            .filter(|name| !fields.contains_key(name))
            .collect();
        if !unknown.is_empty() {
            return Err(TemplateError::UnknownField(format!(
                "{} (available: {})",
                unknown.join(", "),
                fields.keys().cloned().collect::<Vec<_>>().join(", ")
            )));
        }

        self.render(&probe).map(|_| ())
    }

    /// Render the prompt for one record
    pub fn render(&self, record: &ProteinRecord) -> Result<PromptText, TemplateError> {
        let fields = record
            .template_fields()
            .map_err(|e| TemplateError::Render(e.to_string()))?;

        self.engine.render(&self.template, &fields).map(PromptText)
    }
}

/// Record with every field set, so conditional branches render too.
fn probe_record() -> ProteinRecord {
    ProteinRecord {
        accession: "P00000".to_string(),
        entry_name: "PROBE_HUMAN".to_string(),
        protein_name: "Probe protein".to_string(),
        gene_names: vec!["PRB1".to_string(), "PRB2".to_string()],
        organism: "Homo sapiens".to_string(),
        function_text: "Probe function.".to_string(),
        disease_text: "Probe disease.".to_string(),
        sequence_length: Some(100),
    }
}
