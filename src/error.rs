//! Error types for version-checker operations.
//!
//! This module defines [`VersionCheckError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Configuration errors are fatal and abort the run before any check
//! - Command errors fail a single check; the runner keeps going
//! - A shell that cannot be started surfaces as `Other`, carrying the
//!   `anyhow` context chain

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for version-checker operations.
#[derive(Debug, Error)]
pub enum VersionCheckError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// Shell command ran but did not exit successfully.
    #[error("{}", command_failed_message(.code))]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop. Displays the full
    /// context chain.
    #[error("{0:#}")]
    Other(#[from] anyhow::Error),
}

fn command_failed_message(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
    }
}

/// Result type alias for version-checker operations.
pub type Result<T> = std::result::Result<T, VersionCheckError>;
