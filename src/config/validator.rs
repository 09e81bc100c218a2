//! Configuration validation rules.
//!
//! Every tool entry needs a non-blank `name`, `command` and `expect`.
//! An empty tool list is valid.

use crate::config::schema::VersionConfig;
use crate::error::{Result, VersionCheckError};

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Index of the offending entry in `tools`
    pub index: usize,
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &VersionConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, tool) in config.tools.iter().enumerate() {
        let fields = [
            ("name", &tool.name),
            ("command", &tool.command),
            ("expect", &tool.expect),
        ];

        for (field, value) in fields {
            if value.trim().is_empty() {
                errors.push(ValidationError {
                    rule: format!("empty-{}", field),
                    message: format!("tools[{}]: '{}' must not be empty", index, field),
                    index,
                });
            }
        }
    }

    errors
}

/// Validate a configuration, failing with every problem found.
pub fn validate(config: &VersionConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(VersionCheckError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
