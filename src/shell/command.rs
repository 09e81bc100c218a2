//! Shell command execution.
//!
//! Commands are handed to the platform shell as a single string so that
//! quoting, pipes and redirections in configured commands behave as they
//! would at a prompt. Stderr is redirected into the stdout pipe, so the
//! captured text keeps the order the command wrote it in.

use crate::error::{Result, VersionCheckError};
use anyhow::Context;
use std::time::{Duration, Instant};

/// Captured output of a successful command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Stdout and stderr interleaved in write order.
    pub output: String,

    /// Execution duration.
    pub duration: Duration,
}

impl CommandOutput {
    /// Captured output, trimmed of surrounding whitespace.
    pub fn combined(&self) -> String {
        self.output.trim().to_string()
    }
}

/// Execute a shell command, capturing stdout and stderr through one pipe.
///
/// # Errors
///
/// Returns `Other` if the shell cannot be started and `CommandFailed` if
/// the command exits unsuccessfully.
pub fn execute(command: &str) -> Result<CommandOutput> {
    let start = Instant::now();

    let output = duct::cmd!(shell_program(), shell_flag(), command)
        .stdin_null()
        .stderr_to_stdout()
        .stdout_capture()
        .unchecked()
        .run()
        .with_context(|| format!("failed to start command '{}'", command))?;

    let duration = start.elapsed();
    tracing::debug!(
        "'{}' exited with {:?} after {:?}",
        command,
        output.status.code(),
        duration
    );

    if !output.status.success() {
        return Err(VersionCheckError::CommandFailed {
            command: command.to_string(),
            code: output.status.code(),
        });
    }

    Ok(CommandOutput {
        output: String::from_utf8_lossy(&output.stdout).to_string(),
        duration,
    })
}

/// Shell used to interpret commands.
fn shell_program() -> &'static str {
    if cfg!(target_os = "windows") {
        "cmd"
    } else {
        "sh"
    }
}

/// Get the flag to pass commands to the shell.
fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_successful_command() {
        let result = execute("echo hello").unwrap();
        assert!(result.output.contains("hello"));
        assert_eq!(result.combined(), "hello");
    }

    #[test]
    fn execute_failing_command() {
        let result = execute("exit 3");
        assert!(matches!(
            result,
            Err(VersionCheckError::CommandFailed { code: Some(3), .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn execute_missing_binary_fails() {
        let result = execute("non_existent_command_12345");
        match result {
            Err(VersionCheckError::CommandFailed { command, code }) => {
                assert_eq!(command, "non_existent_command_12345");
                assert_eq!(code, Some(127));
            }
            other => panic!("Expected CommandFailed, got {:?}", other),
        }
    }

    #[cfg(unix)]
    #[test]
    fn combined_keeps_write_order() {
        let result = execute("echo out; echo 'tool 1.2.3' >&2").unwrap();
        assert_eq!(result.combined(), "out\ntool 1.2.3");

        let result = execute("echo 'warning 0.9' >&2; echo 'tool 1.2.3'").unwrap();
        assert_eq!(result.combined(), "warning 0.9\ntool 1.2.3");
    }

    #[test]
    fn combined_trims_whitespace() {
        let output = CommandOutput {
            output: "\n  go version go1.22.3  \n".to_string(),
            duration: Duration::ZERO,
        };
        assert_eq!(output.combined(), "go version go1.22.3");
    }

    #[test]
    fn execute_tracks_duration() {
        let result = execute("echo fast").unwrap();
        assert!(result.duration.as_millis() < 5000);
    }
}
