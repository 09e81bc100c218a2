//! Configuration file loading.

use crate::config::schema::VersionConfig;
use crate::config::validator::validate;
use crate::error::{Result, VersionCheckError};
use std::fs;
use std::path::Path;

/// Config path used when none is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Load a config file and parse it into [`VersionConfig`].
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<VersionConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            VersionCheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            VersionCheckError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into [`VersionConfig`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<VersionConfig> {
    // An empty document declares no tools.
    if content.trim().is_empty() {
        return Ok(VersionConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| VersionCheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load and validate the config file at `path`.
pub fn load_config(path: &Path) -> Result<VersionConfig> {
    let config = load_config_file(path)?;
    validate(&config)?;
    tracing::debug!(
        "Loaded {} tool(s) from {}",
        config.tools.len(),
        path.display()
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    #[test]
    fn load_config_file_reads_tools() {
        let (_temp, path) = write_config(
            r#"
tools:
  - name: "FullVersion"
    command: "echo 'FullVersion 1.22.3'"
    expect: "1.22.3"
"#,
        );

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.tools.len(), 1);
        assert_eq!(config.tools[0].expect, "1.22.3");
    }

    #[test]
    fn load_config_file_missing_returns_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yaml");

        let result = load_config_file(&path);
        assert!(matches!(
            result,
            Err(VersionCheckError::ConfigNotFound { .. })
        ));
    }

    #[test]
    fn parse_config_reports_path_on_error() {
        let result = parse_config("tools: [unclosed", Path::new("/etc/config.yaml"));
        match result {
            Err(VersionCheckError::ConfigParseError { path, .. }) => {
                assert_eq!(path, Path::new("/etc/config.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn parse_config_rejects_wrong_shape() {
        let result = parse_config("tools: not-a-list", Path::new("config.yaml"));
        assert!(matches!(
            result,
            Err(VersionCheckError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn parse_config_empty_document_has_no_tools() {
        let config = parse_config("  \n", Path::new("config.yaml")).unwrap();
        assert!(config.tools.is_empty());
    }

    #[test]
    fn load_config_validates() {
        let (_temp, path) = write_config(
            r#"
tools:
  - name: "Go"
    command: "go version"
    expect: ""
"#,
        );

        let result = load_config(&path);
        assert!(matches!(
            result,
            Err(VersionCheckError::ConfigValidationError { .. })
        ));
    }
}
