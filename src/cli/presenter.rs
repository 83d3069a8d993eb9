//! CLI presenter for output formatting

use colored::*;

use crate::domain::capture::{CaptureResult, ContentKind};

/// Presenter for CLI output formatting
pub struct Presenter;

impl Presenter {
    /// Create a new presenter
    pub fn new() -> Self {
        Self
    }

    /// Print info message to stderr
    pub fn info(&self, message: &str) {
        eprintln!("{} {}", "ℹ".cyan(), message);
    }

    /// Print success message to stderr
    pub fn success(&self, message: &str) {
        eprintln!("{} {}", "✓".green(), message);
    }

    /// Print warning message to stderr
    pub fn warn(&self, message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print error message to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Output text to stdout
    pub fn output(&self, text: &str) {
        println!("{}", text);
    }

    /// Print a key-value pair (for config list)
    pub fn key_value(&self, key: &str, value: &str) {
        println!("{}: {}", key.cyan(), value);
    }

    /// Print watch status
    pub fn watch_status(&self, state: &str) {
        eprintln!("{} Watch: {}", "●".cyan(), state);
    }

    /// One-line summary of a capture
    pub fn format_capture(&self, result: &CaptureResult) -> String {
        if result.kind == ContentKind::Unrecognized {
            return "Nothing saved: clipboard content not recognized".to_string();
        }

        let mut line = format!("{}: {}", result.kind.label(), result.display_name());
        if result.failed > 0 {
            line.push_str(&format!(
                " ({} saved, {} failed)",
                result.saved.len(),
                result.failed
            ));
        }
        line
    }

    /// Report a capture: summary on stderr, saved paths on stdout
    pub fn capture(&self, result: &CaptureResult) {
        let summary = self.format_capture(result);
        if result.success {
            self.success(&summary);
        } else if result.kind == ContentKind::Unrecognized {
            self.warn(&summary);
        } else {
            self.error(&format!("{}: nothing could be written", summary));
        }

        for path in &result.saved {
            self.output(&path.to_string_lossy());
        }
    }

    /// Report a capture as JSON on stdout
    pub fn capture_json(&self, result: &CaptureResult) -> Result<(), serde_json::Error> {
        self.output(&serde_json::to_string_pretty(result)?);
        Ok(())
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
