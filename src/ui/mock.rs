//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion.
//!
//! # Example
//!
//! ```
//! use version_checker::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.error("Go version mismatch: Expected '1.22.3', got '1.21.0'");
//! ui.success("Versions OK");
//!
//! assert!(ui.has_error("version mismatch"));
//! assert_eq!(ui.lines().len(), 2);
//! ```

use super::UserInterface;

/// Kind of a captured line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Success,
    Error,
    Detail,
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    lines: Vec<(LineKind, String)>,
}

impl MockUI {
    /// Create an empty MockUI.
    pub fn new() -> Self {
        Self::default()
    }

    /// All captured lines in output order.
    pub fn lines(&self) -> &[(LineKind, String)] {
        &self.lines
    }

    /// Captured lines of one kind.
    pub fn of_kind(&self, kind: LineKind) -> Vec<&str> {
        self.lines
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, line)| line.as_str())
            .collect()
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> Vec<&str> {
        self.of_kind(LineKind::Success)
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> Vec<&str> {
        self.of_kind(LineKind::Error)
    }

    /// Get all captured detail lines.
    pub fn details(&self) -> Vec<&str> {
        self.of_kind(LineKind::Detail)
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors().iter().any(|m| m.contains(msg))
    }

    /// Check if a specific detail was shown.
    pub fn has_detail(&self, msg: &str) -> bool {
        self.details().iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn success(&mut self, msg: &str) {
        self.lines.push((LineKind::Success, msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.lines.push((LineKind::Error, msg.to_string()));
    }

    fn detail(&mut self, msg: &str) {
        self.lines.push((LineKind::Detail, msg.to_string()));
    }
}
