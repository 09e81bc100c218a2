//! CLI argument definitions.
//!
//! The main entry point is the [`Cli`] struct. There are no subcommands:
//! every invocation checks the tools in one configuration file.

use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;

/// Check installed tool versions against a configuration file.
#[derive(Debug, Parser)]
#[command(name = "version-checker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file listing the tools to check
    #[arg(
        short,
        long,
        env = "VERSION_CHECKER_CONFIG",
        default_value = DEFAULT_CONFIG_PATH
    )]
    pub config: PathBuf,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
