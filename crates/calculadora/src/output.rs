//! Output formatting and diagnostic reporting.

use console::{style, Color, Term};
use serde::{Deserialize, Serialize};

/// Output format for state and results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Diagnostic reporter for the harness.
///
/// Results and state echoes belong on stdout; everything here goes to
/// stderr so scripted sessions can separate the two streams.
#[derive(Debug)]
pub struct Reporter {
    term: Term,
    /// Whether to use colors
    pub use_color: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(true, false)
    }
}

impl Reporter {
    /// Create a reporter writing to stderr
    #[must_use]
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self {
            term: Term::stderr(),
            use_color,
            quiet,
        }
    }

    /// Print a failure diagnostic; failures print even in quiet mode
    pub fn failure(&self, message: &str) {
        self.emit("error:", Color::Red, message);
    }

    /// Print a warning diagnostic
    pub fn warning(&self, message: &str) {
        if !self.quiet {
            self.emit("warning:", Color::Yellow, message);
        }
    }

    /// Print an informational message
    pub fn info(&self, message: &str) {
        if !self.quiet {
            self.emit("info:", Color::Blue, message);
        }
    }

    fn emit(&self, label: &str, color: Color, message: &str) {
        let prefix = if self.use_color {
            style(label).fg(color).bold().to_string()
        } else {
            label.to_string()
        };
        let line = format!("{prefix} {message}");
        let _ = self.term.write_line(&line);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_format_defaults_to_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn test_format_serde_names() {
        assert_eq!(
            serde_json::to_string(&OutputFormat::Json).unwrap(),
            "\"Json\""
        );
        let format: OutputFormat = serde_json::from_str("\"Text\"").unwrap();
        assert_eq!(format, OutputFormat::Text);
    }

    #[test]
    fn test_reporter_construction() {
        let plain = Reporter::new(false, true);
        assert!(!plain.use_color);
        assert!(plain.quiet);

        let default = Reporter::default();
        assert!(default.use_color);
        assert!(!default.quiet);
    }

    #[test]
    fn test_diagnostics_write_without_panic() {
        let reporter = Reporter::new(false, false);
        reporter.failure("Division by zero");
        reporter.warning("unknown command");
        reporter.info("reading from stdin");

        let colored = Reporter::new(true, false);
        colored.failure("Division by zero");
    }

    #[test]
    fn test_quiet_still_reports_failures() {
        let reporter = Reporter::new(false, true);
        reporter.warning("suppressed");
        reporter.info("suppressed");
        reporter.failure("still shown");
    }
}
