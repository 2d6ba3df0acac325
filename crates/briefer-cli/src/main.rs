//! gene-briefer - Main entry point

use briefer_cli::commands::brief::{self, BriefOptions};
use briefer_cli::Cli;
use briefer_common::logging::{init_logging, LogConfig, LogLevel, LogOutput};
use clap::Parser;
use std::process;
use tracing::error;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Optional .env in the working directory
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    // Handle markdown help generation
    if cli.markdown_help {
        println!("{}", clap_markdown::help_markdown::<Cli>());
        return;
    }

    // Warnings only by default, debug with --verbose; standard error either way
    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        LogLevel::Warn
    };
    let defaults = LogConfig::builder()
        .level(level)
        .output(LogOutput::Console)
        .log_file_prefix("gene-briefer")
        .build();

    // Environment variables take precedence
    let log_config = match defaults.clone().merge_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Warning: ignoring LOG_* overrides: {}", e);
            defaults
        },
    };

    // CLI should work without logging
    let guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        },
    };

    if let Err(e) = brief::run(BriefOptions::from(&cli)).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        drop(guard);
        process::exit(1);
    }
}
