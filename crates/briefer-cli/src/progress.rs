//! Console progress for the per-accession pipeline
//!
//! Spinners draw on standard error and stay invisible when it is not a
//! terminal, so piped JSON output is never interleaved with progress lines.

use crate::output::Failure;
use briefer_common::Accession;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::debug;

/// Create a spinner for indeterminate operations
pub fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Step tracker for one accession, e.g. `[P04637] [2/3] Rendering prompt`
pub struct AccessionProgress {
    bar: ProgressBar,
    accession: String,
    total_steps: usize,
}

impl AccessionProgress {
    pub fn start(accession: &Accession, total_steps: usize, visible: bool) -> Self {
        let bar = if visible {
            create_spinner(&format!("[{}] Starting", accession))
        } else {
            ProgressBar::hidden()
        };

        Self {
            bar,
            accession: accession.to_string(),
            total_steps,
        }
    }

    pub fn step(&self, step: usize, message: &str) {
        let line = step_message(&self.accession, step, self.total_steps, message);
        debug!(accession = %self.accession, step, total = self.total_steps, "{}", message);
        self.bar.set_message(line);
    }

    pub fn finish(self) {
        self.bar.finish_and_clear();
    }
}

fn step_message(accession: &str, step: usize, total: usize, message: &str) -> String {
    format!("[{}] [{}/{}] {}", accession, step, total, message)
}

/// Print a per-accession failure to standard error
pub fn report_failure(accession: &Accession, failure: &Failure) {
    eprintln!(
        "{} [{}] {}",
        "✗".red(),
        accession.to_string().yellow(),
        failure.message
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_step_message() {
        assert_eq!(
            step_message("P04637", 2, 3, "Rendering prompt"),
            "[P04637] [2/3] Rendering prompt"
        );
    }

    #[test]
    fn test_hidden_progress() {
        let accession = Accession::new("P04637").unwrap();
        let progress = AccessionProgress::start(&accession, 3, false);
        progress.step(1, "Fetching UniProt entry");
        assert!(progress.bar.is_hidden());
        progress.finish();
    }

    #[test]
    fn test_create_spinner() {
        let pb = create_spinner("Working");
        assert_eq!(pb.message(), "Working");
        pb.finish_and_clear();
    }
}
