//! UniProtKB JSON entry types
//!
//! Only the parts of the entry used for briefings are modelled. Every section
//! is optional so sparse or unreviewed entries still produce a record.

use crate::error::FetchError;
use briefer_common::{Accession, ProteinRecord};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Comment type holding the functional description
pub const COMMENT_FUNCTION: &str = "FUNCTION";

/// Comment type holding disease associations
pub const COMMENT_DISEASE: &str = "DISEASE";

/// Subset of a UniProtKB entry (`GET /uniprotkb/{accession}`)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniProtEntry {
    #[serde(default)]
    pub primary_accession: Option<String>,

    #[serde(default, rename = "uniProtkbId")]
    pub uniprotkb_id: Option<String>,

    #[serde(default)]
    pub protein_description: Option<ProteinDescription>,

    #[serde(default)]
    pub genes: Vec<Gene>,

    #[serde(default)]
    pub organism: Option<Organism>,

    #[serde(default)]
    pub comments: Vec<Comment>,

    #[serde(default)]
    pub sequence: Option<Sequence>,

    /// Plain `name` field served by some mirrors and test fixtures
    #[serde(default)]
    pub name: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinDescription {
    #[serde(default)]
    pub recommended_name: Option<ProteinName>,

    /// Names on unreviewed (TrEMBL) entries
    #[serde(default)]
    pub submission_names: Vec<ProteinName>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinName {
    #[serde(default)]
    pub full_name: Option<EvidencedValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gene {
    #[serde(default)]
    pub gene_name: Option<EvidencedValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organism {
    #[serde(default)]
    pub scientific_name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default)]
    pub comment_type: String,

    #[serde(default)]
    pub texts: Vec<EvidencedValue>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sequence {
    #[serde(default)]
    pub length: Option<u32>,
}

/// `{"value": "..."}` wrapper; evidence lists are ignored
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvidencedValue {
    pub value: String,
}

impl UniProtEntry {
    /// Primary accession of the returned entry, when it is not the one
    /// requested (secondary accessions of merged entries resolve this way).
    pub fn resolved_accession(&self, requested: &Accession) -> Option<&str> {
        self.primary_accession
            .as_deref()
            .filter(|primary| *primary != requested.as_str())
    }

    /// Full protein name: recommended, then first submitted, then `name`.
    pub fn protein_name(&self) -> Option<&str> {
        let description = self.protein_description.as_ref();

        description
            .and_then(|d| d.recommended_name.as_ref())
            .and_then(|n| n.full_name.as_ref())
            .or_else(|| {
                description
                    .and_then(|d| d.submission_names.iter().find_map(|n| n.full_name.as_ref()))
            })
            .map(|v| v.value.as_str())
            .or_else(|| self.name.as_ref().and_then(Value::as_str))
    }

    pub fn gene_names(&self) -> Vec<String> {
        self.genes
            .iter()
            .filter_map(|g| g.gene_name.as_ref())
            .map(|v| v.value.clone())
            .collect()
    }

    /// Texts of every comment of the given type, joined by newlines.
    pub fn comment_text(&self, comment_type: &str) -> String {
        self.comments
            .iter()
            .filter(|c| c.comment_type == comment_type)
            .flat_map(|c| c.texts.iter().map(|t| t.value.as_str()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Normalize into the record used for prompt rendering.
    pub fn into_record(self, accession: &Accession) -> ProteinRecord {
        ProteinRecord {
            accession: accession.to_string(),
            entry_name: self.uniprotkb_id.clone().unwrap_or_default(),
            protein_name: self.protein_name().unwrap_or_default().to_string(),
            gene_names: self.gene_names(),
            organism: self
                .organism
                .as_ref()
                .and_then(|o| o.scientific_name.clone())
                .unwrap_or_default(),
            function_text: self.comment_text(COMMENT_FUNCTION),
            disease_text: self.comment_text(COMMENT_DISEASE),
            sequence_length: self.sequence.as_ref().and_then(|s| s.length),
        }
    }
}

/// Parse a raw UniProt JSON body into a [`ProteinRecord`].
pub fn parse_entry(accession: &Accession, raw: Value) -> Result<ProteinRecord, FetchError> {
    if !raw.is_object() {
        return Err(FetchError::InvalidBody("expected a JSON object".to_string()));
    }

    let entry: UniProtEntry =
        serde_json::from_value(raw).map_err(|e| FetchError::InvalidBody(e.to_string()))?;

    if let Some(primary) = entry.resolved_accession(accession) {
        debug!(
            requested = %accession,
            primary = %primary,
            "UniProt returned the entry under a different primary accession"
        );
    }

    Ok(entry.into_record(accession))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn p53_entry() -> Value {
        json!({
            "primaryAccession": "P04637",
            "uniProtkbId": "P53_HUMAN",
            "proteinDescription": {
                "recommendedName": {
                    "fullName": { "value": "Cellular tumor antigen p53" }
                }
            },
            "genes": [
                { "geneName": { "value": "TP53" }, "synonyms": [{ "value": "P53" }] }
            ],
            "organism": { "scientificName": "Homo sapiens", "taxonId": 9606 },
            "comments": [
                {
                    "commentType": "FUNCTION",
                    "texts": [
                        { "value": "Acts as a tumor suppressor.", "evidences": [] },
                        { "value": "Induces growth arrest or apoptosis." }
                    ]
                },
                { "commentType": "SUBUNIT", "texts": [{ "value": "Forms homodimers." }] },
                {
                    "commentType": "DISEASE",
                    "disease": { "diseaseId": "Li-Fraumeni syndrome" },
                    "texts": [{ "value": "Li-Fraumeni syndrome." }]
                }
            ],
            "sequence": { "value": "MEEPQSDPSV", "length": 393 }
        })
    }

    fn accession(s: &str) -> Accession {
        Accession::new(s).unwrap()
    }

    #[test]
    fn test_parse_full_entry() {
        let record = parse_entry(&accession("P04637"), p53_entry()).unwrap();

        assert_eq!(record.accession, "P04637");
        assert_eq!(record.entry_name, "P53_HUMAN");
        assert_eq!(record.protein_name, "Cellular tumor antigen p53");
        assert_eq!(record.gene_names, vec!["TP53"]);
        assert_eq!(record.organism, "Homo sapiens");
        assert_eq!(
            record.function_text,
            "Acts as a tumor suppressor.\nInduces growth arrest or apoptosis."
        );
        assert_eq!(record.disease_text, "Li-Fraumeni syndrome.");
        assert_eq!(record.sequence_length, Some(393));
    }

    #[test]
    fn test_parse_sparse_entry() {
        let record = parse_entry(&accession("P04637"), json!({ "name": "TP53" })).unwrap();

        assert_eq!(record.protein_name, "TP53");
        assert!(record.gene_names.is_empty());
        assert_eq!(record.organism, "");
        assert_eq!(record.function_text, "");
        assert_eq!(record.sequence_length, None);
    }

    #[test]
    fn test_submission_name_fallback() {
        let raw = json!({
            "proteinDescription": {
                "submissionNames": [
                    { "fullName": { "value": "Uncharacterized protein" } }
                ]
            },
            "genes": [{ "orfNames": [{ "value": "ORF1" }] }]
        });

        let record = parse_entry(&accession("A0A000"), raw).unwrap();
        assert_eq!(record.protein_name, "Uncharacterized protein");
        assert!(record.gene_names.is_empty());
    }

    #[test]
    fn test_non_object_body_rejected() {
        let err = parse_entry(&accession("P04637"), json!(["P04637"])).unwrap_err();
        assert!(matches!(err, FetchError::InvalidBody(_)));
    }

    #[test]
    fn test_mistyped_section_rejected() {
        let err = parse_entry(&accession("P04637"), json!({ "genes": "TP53" })).unwrap_err();
        assert!(matches!(err, FetchError::InvalidBody(_)));
    }

    #[test]
    fn test_resolved_accession_for_merged_entry() {
        let entry: UniProtEntry =
            serde_json::from_value(json!({ "primaryAccession": "P04637" })).unwrap();

        assert_eq!(entry.resolved_accession(&accession("Q15086")), Some("P04637"));
        assert_eq!(entry.resolved_accession(&accession("P04637")), None);
        assert_eq!(UniProtEntry::default().resolved_accession(&accession("P04637")), None);
    }

    #[test]
    fn test_merged_entry_keeps_requested_accession() {
        let raw = json!({
            "primaryAccession": "P04637",
            "genes": [{ "geneName": { "value": "TP53" } }]
        });

        let record = parse_entry(&accession("Q15086"), raw).unwrap();
        assert_eq!(record.accession, "Q15086");
        assert_eq!(record.primary_gene(), "TP53");
    }
}
