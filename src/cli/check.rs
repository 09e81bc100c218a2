//! The check command.

use std::path::{Path, PathBuf};

use crate::check::CheckRunner;
use crate::config::load_config;
use crate::error::Result;
use crate::ui::UserInterface;

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self { exit_code }
    }

    /// Whether the command succeeded.
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// Exit code for the process. Codes outside `0..=255` become 1.
    pub fn process_exit_code(&self) -> u8 {
        u8::try_from(self.exit_code).unwrap_or(1)
    }
}

/// Loads the configuration and checks every tool in it.
pub struct CheckCommand {
    config_path: PathBuf,
    runner: CheckRunner,
}

impl CheckCommand {
    /// Create a command for the given config file.
    pub fn new(config_path: &Path) -> Self {
        Self {
            config_path: config_path.to_path_buf(),
            runner: CheckRunner::new(),
        }
    }

    /// Get the config file path.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Configuration errors are returned before any check runs. Check
    /// failures are reported through `ui` and reflected in the exit code.
    pub fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.config_path)?;
        let summary = self.runner.run(&config.tools, ui);

        if summary.all_passed() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(summary.exit_code()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::VersionCheckError;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(content: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.is_success());
        assert_eq!(result.process_exit_code(), 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.is_success());
        assert_eq!(result.process_exit_code(), 1);
    }

    #[test]
    fn out_of_range_exit_code_still_fails() {
        // 256 would wrap to 0 if truncated.
        assert_eq!(CommandResult::failure(256).process_exit_code(), 1);
        assert_eq!(CommandResult::failure(-1).process_exit_code(), 1);
        assert_eq!(CommandResult::failure(2).process_exit_code(), 2);
    }

    #[test]
    fn command_keeps_config_path() {
        let cmd = CheckCommand::new(Path::new("tools.yaml"));
        assert_eq!(cmd.config_path(), Path::new("tools.yaml"));
    }

    #[test]
    fn passing_config_succeeds() {
        let (_temp, path) = write_config(
            r#"
tools:
  - name: "FullVersion"
    command: "echo 'FullVersion 1.22.3'"
    expect: "1.22.3"
"#,
        );
        let mut ui = MockUI::new();
        let result = CheckCommand::new(&path).execute(&mut ui).unwrap();

        assert!(result.is_success());
        assert!(ui.has_success("Versions OK"));
    }

    #[test]
    fn failing_check_exits_one() {
        let (_temp, path) = write_config(
            r#"
tools:
  - name: "VersionMismatch"
    command: "echo 'VersionMismatch 1.22.4'"
    expect: "1.22.3"
"#,
        );
        let mut ui = MockUI::new();
        let result = CheckCommand::new(&path).execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("version mismatch"));
    }

    #[test]
    fn missing_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        let cmd = CheckCommand::new(&temp.path().join("config.yaml"));
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, VersionCheckError::ConfigNotFound { .. }));
        assert!(ui.lines().is_empty());
    }
}
