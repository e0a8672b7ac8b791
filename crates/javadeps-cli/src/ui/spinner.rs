//! Spinner for the index build and other tasks without known duration.

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use std::time::Duration;

use super::colors_enabled;

/// Spinner drawn on stderr.
///
/// A hidden spinner draws nothing, so callers don't branch on `--quiet`.
///
/// ```no_run
/// use javadeps_cli::ui::Spinner;
///
/// let spinner = Spinner::new("Indexing...");
/// spinner.finish("Indexed 120 types");
/// ```
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    /// Create and start a new spinner.
    pub fn new(message: &str) -> Self {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style.tick_strings(&["◐", "◓", "◑", "◒", "●"]));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb }
    }

    /// A spinner that never draws.
    pub fn hidden() -> Self {
        Self {
            pb: ProgressBar::hidden(),
        }
    }

    /// Visible spinner when `visible`, hidden otherwise.
    pub fn maybe(visible: bool, message: &str) -> Self {
        if visible {
            Self::new(message)
        } else {
            Self::hidden()
        }
    }

    /// Finish with a green checkmark.
    pub fn finish(&self, message: &str) {
        let mark = if colors_enabled() {
            "✓".green().to_string()
        } else {
            "✓".to_string()
        };
        self.pb.finish_with_message(format!("{mark} {message}"));
    }

    /// Finish with a red cross.
    pub fn fail(&self, message: &str) {
        let mark = if colors_enabled() {
            "✗".red().to_string()
        } else {
            "✗".to_string()
        };
        self.pb.finish_with_message(format!("{mark} {message}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_creation() {
        let spinner = Spinner::new("Loading...");
        spinner.finish("Done");
    }

    #[test]
    fn test_hidden_spinner() {
        let spinner = Spinner::maybe(false, "Quiet");
        assert!(spinner.pb.is_hidden());
        spinner.fail("Failed");
    }
}
