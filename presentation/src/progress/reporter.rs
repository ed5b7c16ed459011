//! Progress reporting for name generation

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use petname_application::GenerationProgress;
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while waiting for the provider
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationProgress for ProgressReporter {
    fn on_generation_start(&self, subject: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(format!("Generating the perfect name for your {}...", subject));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock() {
            *slot = Some(pb);
        }
    }

    fn on_generation_complete(&self, _success: bool) {
        if let Some(pb) = self.spinner.lock().ok().and_then(|mut slot| slot.take()) {
            pb.finish_and_clear();
        }
    }
}

/// Simple text-based progress (no spinner), written to stderr
pub struct SimpleProgress;

impl GenerationProgress for SimpleProgress {
    fn on_generation_start(&self, subject: &str) {
        eprintln!("{} Generating a name for your {}...", "->".cyan(), subject);
    }

    fn on_generation_complete(&self, success: bool) {
        if !success {
            eprintln!("  {} generation failed", "x".red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = ProgressReporter::new();
        reporter.on_generation_start("brown dog");
        assert!(reporter.spinner.lock().unwrap().is_some());
        reporter.on_generation_complete(true);
        assert!(reporter.spinner.lock().unwrap().is_none());
    }

    #[test]
    fn test_complete_without_start_is_harmless() {
        ProgressReporter::new().on_generation_complete(false);
    }
}
