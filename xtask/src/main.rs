//! Build automation tasks for gene-briefer
//!
//! Run with `cargo xtask <task>`.

use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation tasks for gene-briefer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Generate the CLI reference in Markdown
    GenerateCliDocs {
        /// Output directory for generated documentation
        #[arg(short, long, default_value = "docs")]
        output_dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::GenerateCliDocs { output_dir } => generate_cli_docs(&output_dir)?,
    }

    Ok(())
}

fn generate_cli_docs(output_dir: &Path) -> anyhow::Result<()> {
    println!("Generating CLI documentation...");

    // Generate markdown from clap definitions
    let markdown = clap_markdown::help_markdown::<briefer_cli::Cli>();

    let content = format!(
        r#"# gene-briefer CLI Reference

This file is generated from the CLI source code. To update it, run
`cargo xtask generate-cli-docs`.

## Quick Start

```bash
# Start the local model server and pull a model
ollama serve &
ollama pull llama3

# Brief one or more proteins
gene-briefer P04637 Q9T0Q8 --out briefs.json

# Inspect the UniProt entries without calling the model
gene-briefer P04637 --raw

# Check a custom prompt before spending inference time
gene-briefer P04637 --prompt-file prompt.j2 --dry-run
```

## Prompt Templates

Templates use Jinja syntax. Available fields: `accession`, `entry_name`,
`protein_name`, `gene_names`, `primary_gene`, `gene_list`, `organism`,
`function_text`, `disease_text`, `sequence_length`. A template naming any
other field is rejected before the first request.

## Environment Variables

- `GENE_BRIEFER_UNIPROT_URL` - UniProt REST base URL (default: `https://rest.uniprot.org`)
- `GENE_BRIEFER_OLLAMA_URL` - Inference server base URL (default: `http://localhost:11434`)
- `GENE_BRIEFER_MODEL` - Model name (default: `llama3`)
- `GENE_BRIEFER_UNIPROT_TIMEOUT_SECS` - UniProt request timeout (default: `30`)
- `GENE_BRIEFER_INFERENCE_TIMEOUT_SECS` - Completion request timeout (default: `300`)
- `LOG_LEVEL`, `LOG_OUTPUT`, `LOG_FORMAT`, `LOG_DIR` - Logging overrides

{}
"#,
        markdown
    );

    // Create output directory if it doesn't exist
    fs::create_dir_all(output_dir)?;

    let file_path = output_dir.join("cli-reference.md");
    fs::write(&file_path, content)?;

    println!("✅ Generated CLI documentation at: {}", file_path.display());

    Ok(())
}
