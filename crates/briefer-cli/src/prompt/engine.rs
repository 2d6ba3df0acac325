//! Template engines

use crate::error::TemplateError;
use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Names every template can use without them being record fields.
const BUILTIN_GLOBALS: &[&str] = &["range", "dict", "debug", "namespace", "loop"];

/// Renders a template string against a field mapping
pub trait TemplateEngine: Send + Sync {
    fn render(&self, template: &str, fields: &Map<String, Value>) -> Result<String, TemplateError>;

    /// Top-level names the template reads from its context, in every branch
    fn referenced_fields(&self, template: &str) -> Result<BTreeSet<String>, TemplateError>;
}

/// Jinja-style templates (`{{ field }}`, `{% if %}`, filters)
///
/// Undefined values are errors, so a template naming a field the record
/// does not have fails instead of rendering an empty string.
#[derive(Debug, Default, Clone, Copy)]
pub struct MiniJinjaEngine;

impl MiniJinjaEngine {
    pub fn new() -> Self {
        Self
    }

    fn environment<'source>() -> Environment<'source> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn render(&self, template: &str, fields: &Map<String, Value>) -> Result<String, TemplateError> {
        Self::environment()
            .render_str(template, fields)
            .map_err(classify)
    }

    fn referenced_fields(&self, template: &str) -> Result<BTreeSet<String>, TemplateError> {
        let env = Self::environment();
        let parsed = env.template_from_str(template).map_err(classify)?;

        Ok(parsed
            .undeclared_variables(false)
            .into_iter()
            .filter(|name| !BUILTIN_GLOBALS.contains(&name.as_str()))
            .collect())
    }
}

fn classify(err: minijinja::Error) -> TemplateError {
    let message = err.to_string();
    match err.kind() {
        ErrorKind::SyntaxError | ErrorKind::BadEscape => TemplateError::Syntax(message),
        ErrorKind::UndefinedError => TemplateError::UnknownField(message),
        _ => TemplateError::Render(message),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("test fields must be an object"),
        }
    }

    #[test]
    fn test_substitutes_fields() {
        let out = MiniJinjaEngine::new()
            .render(
                "{{ gene }} in {{ organism }} ({{ genes | join(', ') }})",
                &fields(json!({ "gene": "TP53", "organism": "Homo sapiens", "genes": ["TP53", "P53"] })),
            )
            .unwrap();
        assert_eq!(out, "TP53 in Homo sapiens (TP53, P53)");
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        let err = MiniJinjaEngine::new()
            .render("Tissue: {{ tissue }}", &fields(json!({ "gene": "TP53" })))
            .unwrap_err();
        assert!(matches!(err, TemplateError::UnknownField(_)));
    }

    #[test]
    fn test_syntax_error() {
        let err = MiniJinjaEngine::new()
            .render("{% if gene %}unterminated", &fields(json!({ "gene": "TP53" })))
            .unwrap_err();
        assert!(matches!(err, TemplateError::Syntax(_)));
    }

    #[test]
    fn test_referenced_fields_cover_every_branch() {
        let names = MiniJinjaEngine::new()
            .referenced_fields(
                "{% if sequence_length %}{{ sequence_length }}{% else %}{{ tissue }}{% endif %}\
                 {% for g in gene_names %}{{ g }}{{ loop.index }}{% endfor %}{{ range(2) | length }}",
            )
            .unwrap();
        let names: Vec<&str> = names.iter().map(String::as_str).collect();
        assert_eq!(names, vec!["gene_names", "sequence_length", "tissue"]);
    }

    #[test]
    fn test_referenced_fields_reports_syntax_error() {
        let err = MiniJinjaEngine::new()
            .referenced_fields("{% for g in gene_names %}")
            .unwrap_err();
        assert!(matches!(err, TemplateError::Syntax(_)));
    }

    #[test]
    fn test_literal_braces_pass_through() {
        let out = MiniJinjaEngine::new()
            .render("{\n  \"gene\": \"{{ gene }}\"\n}\n", &fields(json!({ "gene": "TP53" })))
            .unwrap();
        assert_eq!(out, "{\n  \"gene\": \"TP53\"\n}\n");
    }
}
