//! Command-line interface.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`check`] - The check command

pub mod args;
pub mod check;

pub use args::Cli;
pub use check::{CheckCommand, CommandResult};
