//! Domain types shared by the briefing pipeline

use crate::error::{BriefError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Placeholder used in prompts when a record has no gene names.
pub const MISSING_GENE: &str = "N/A";

/// Identifier of one protein database entry, as typed by the user.
///
/// The wrapped string is never altered: `" P04637"` stays `" P04637"` and
/// is looked up (and reported) exactly like that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Accession(String);

impl Accession {
    /// Validate a single user-supplied accession.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(BriefError::InvalidAccession(raw));
        }
        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Accession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Accession {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validate every accession in input order.
///
/// Duplicates are kept; each occurrence is processed on its own.
pub fn resolve<I, S>(inputs: I) -> Result<Vec<Accession>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    inputs.into_iter().map(Accession::new).collect()
}

/// Normalized protein metadata extracted from a database entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProteinRecord {
    /// Accession the record was fetched for
    pub accession: String,

    /// Entry name / ID (e.g., "P53_HUMAN")
    pub entry_name: String,

    /// Recommended (or submitted) full protein name
    pub protein_name: String,

    /// Gene names in database order
    pub gene_names: Vec<String>,

    /// Organism scientific name
    pub organism: String,

    /// FUNCTION comment texts joined by newlines
    pub function_text: String,

    /// DISEASE comment texts joined by newlines
    pub disease_text: String,

    /// Sequence length in amino acids
    pub sequence_length: Option<u32>,
}

impl ProteinRecord {
    /// First gene name, or `N/A` when the entry lists none.
    pub fn primary_gene(&self) -> &str {
        self.gene_names
            .first()
            .map(String::as_str)
            .unwrap_or(MISSING_GENE)
    }

    /// Comma-separated gene names, or `N/A` when the entry lists none.
    pub fn gene_list(&self) -> String {
        if self.gene_names.is_empty() {
            MISSING_GENE.to_string()
        } else {
            self.gene_names.join(", ")
        }
    }

    /// Field mapping handed to prompt templates.
    ///
    /// Contains every serialized field plus the derived `primary_gene` and
    /// `gene_list` values.
    pub fn template_fields(&self) -> Result<Map<String, Value>> {
        let mut fields = match serde_json::to_value(self)? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        fields.insert(
            "primary_gene".to_string(),
            Value::String(self.primary_gene().to_string()),
        );
        fields.insert("gene_list".to_string(), Value::String(self.gene_list()));
        Ok(fields)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_accession_rejects_blank() {
        assert!(Accession::new("").is_err());
        assert!(Accession::new("   ").is_err());
    }

    #[test]
    fn test_accession_keeps_input_unchanged() {
        let acc = Accession::new("p04637 ").unwrap();
        assert_eq!(acc.as_str(), "p04637 ");
        assert_eq!(acc.to_string(), "p04637 ");
    }

    #[test]
    fn test_resolve_keeps_order_and_duplicates() {
        let accessions = resolve(["P04637", "Q9T0Q8", "P04637"]).unwrap();
        let raw: Vec<&str> = accessions.iter().map(Accession::as_str).collect();
        assert_eq!(raw, vec!["P04637", "Q9T0Q8", "P04637"]);
    }

    #[test]
    fn test_resolve_fails_on_any_blank_entry() {
        let err = resolve(["P04637", ""]).unwrap_err();
        assert!(matches!(err, BriefError::InvalidAccession(ref s) if s.is_empty()));
    }

    #[test]
    fn test_gene_helpers() {
        let mut record = ProteinRecord::default();
        assert_eq!(record.primary_gene(), "N/A");
        assert_eq!(record.gene_list(), "N/A");

        record.gene_names = vec!["TP53".to_string(), "P53".to_string()];
        assert_eq!(record.primary_gene(), "TP53");
        assert_eq!(record.gene_list(), "TP53, P53");
    }

    #[test]
    fn test_template_fields() {
        let record = ProteinRecord {
            accession: "P04637".to_string(),
            protein_name: "Cellular tumor antigen p53".to_string(),
            gene_names: vec!["TP53".to_string()],
            sequence_length: Some(393),
            ..Default::default()
        };

        let fields = record.template_fields().unwrap();
        assert_eq!(fields["accession"], "P04637");
        assert_eq!(fields["primary_gene"], "TP53");
        assert_eq!(fields["gene_list"], "TP53");
        assert_eq!(fields["sequence_length"], 393);
        assert_eq!(fields["organism"], "");
        assert!(fields["gene_names"].is_array());
    }
}
