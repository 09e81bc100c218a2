//! Report output.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`TerminalUI`] writing to stdout
//! - [`MockUI`] capturing output for tests
//! - [`ReportTheme`] console styling

pub mod mock;
pub mod terminal;
pub mod theme;

pub use mock::{LineKind, MockUI};
pub use terminal::{create_ui, TerminalUI};
pub use theme::{should_use_colors, ReportTheme};

/// Trait for user interface interactions.
///
/// This trait allows mocking the UI in tests.
pub trait UserInterface {
    /// Display a success message.
    fn success(&mut self, msg: &str);

    /// Display a failure diagnostic.
    fn error(&mut self, msg: &str);

    /// Display secondary detail for the preceding line.
    fn detail(&mut self, msg: &str);
}
