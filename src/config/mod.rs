//! Configuration loading, parsing, and validation.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use version_checker::config::{load_config_file, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yaml");
//! fs::write(
//!     &path,
//!     "tools:\n  - name: Go\n    command: go version\n    expect: \"1.22.3\"\n",
//! )
//! .unwrap();
//!
//! let config = load_config_file(&path).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.tools[0].name, "Go");
//! ```
//!
//! # Configuration File Location
//!
//! The file is read from `--config <PATH>`, then `VERSION_CHECKER_CONFIG`,
//! then `config.yaml` in the working directory.

pub mod loader;
pub mod schema;
pub mod validator;

// Schema re-exports
pub use schema::{ToolSpec, VersionConfig};

// Loader re-exports
pub use loader::{load_config, load_config_file, parse_config, DEFAULT_CONFIG_PATH};

// Validator re-exports
pub use validator::{validate, validate_config, ValidationError};
