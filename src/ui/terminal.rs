//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, ReportTheme, UserInterface};

/// Writes the report to stdout.
pub struct TerminalUI {
    term: Term,
    theme: ReportTheme,
}

impl TerminalUI {
    /// Create a terminal UI, colored when stdout supports it.
    pub fn new() -> Self {
        let theme = if should_use_colors() {
            ReportTheme::new()
        } else {
            ReportTheme::plain()
        };
        Self::with_theme(theme)
    }

    /// Create a terminal UI with an explicit theme.
    pub fn with_theme(theme: ReportTheme) -> Self {
        Self {
            term: Term::stdout(),
            theme,
        }
    }
}

impl Default for TerminalUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface for TerminalUI {
    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn detail(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_detail(msg)).ok();
    }
}

/// Create the UI for a run.
pub fn create_ui(no_color: bool) -> Box<dyn UserInterface> {
    if no_color {
        Box::new(TerminalUI::with_theme(ReportTheme::plain()))
    } else {
        Box::new(TerminalUI::new())
    }
}
