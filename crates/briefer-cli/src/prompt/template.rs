//! Built-in prompt template

/// Default prompt asking for a structured JSON briefing.
///
/// Available fields: `accession`, `entry_name`, `protein_name`,
/// `gene_names`, `primary_gene`, `gene_list`, `organism`, `function_text`,
/// `disease_text`, `sequence_length`.
pub const DEFAULT_TEMPLATE: &str = r#"You are a bioinformatics assistant.

I will give you information about a protein from UniProt (function, disease relevance, etc.).
Using ONLY that information, produce a concise summary in the following JSON format:

{
  "gene": "<main gene symbol>",
  "protein_name": "<short descriptive name>",
  "organism": "<species>",
  "summary_student": "<2-3 sentence explanation for a biology student>",
  "summary_researcher": "<2-3 sentence explanation for a researcher>",
  "key_functions": ["...", "..."],
  "pathways_or_processes": ["...", "..."],
  "disease_relevance": ["...", "..."],
  "experimental_notes": ["...", "..."]
}

If information is not available, use an empty list or null.
Respond with the JSON object only.

Here is the protein metadata:

Accession: {{ accession }}
Gene names: {{ gene_list }}
Protein name: {{ protein_name }}
Organism: {{ organism }}
{% if sequence_length %}Sequence length: {{ sequence_length }} amino acids
{% endif %}
FUNCTION:
{{ function_text }}

DISEASE:
{{ disease_text }}
"#;
