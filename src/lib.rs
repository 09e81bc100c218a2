//! version-checker - verify installed tool versions.
//!
//! Each tool declared in a YAML file is probed with a shell command. A
//! version token is pulled out of the command's output and compared with
//! the expected version; any failure makes the run fail.
//!
//! # Modules
//!
//! - [`check`] - Per-tool checks and the sequential runner
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`shell`] - Shell command execution
//! - [`ui`] - Report output
//! - [`version`] - Version extraction and comparison
//!
//! # Example
//!
//! ```
//! use version_checker::version::{extract_version, versions_match};
//!
//! let output = "openrsync: protocol version 29\nrsync version 2.6.9 compatible";
//! let version = extract_version("rsync --version", output).unwrap();
//! assert_eq!(version, "2.6.9");
//! assert!(versions_match(&version, "2.6.9"));
//! ```
//!
//! For file-based config loading, see the integration tests.

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod shell;
pub mod ui;
pub mod version;

pub use error::{Result, VersionCheckError};
