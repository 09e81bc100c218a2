//! Check outcomes.

use std::fmt;

/// Why a single check failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckFailure {
    /// The command could not be run or exited unsuccessfully.
    Execution { message: String },
    /// The command ran but printed nothing version-like.
    NoVersionFound { output: String },
    /// A version was found but does not equal the expected one.
    Mismatch {
        expected: String,
        actual: String,
        output: String,
    },
}

impl CheckFailure {
    /// Diagnostic line for the tool called `name`.
    pub fn diagnostic(&self, name: &str) -> String {
        match self {
            Self::Execution { message } => {
                format!("Error executing command for {}: {}", name, message)
            }
            Self::NoVersionFound { .. } => format!("{}: No version found in output", name),
            Self::Mismatch {
                expected, actual, ..
            } => format!(
                "{} version mismatch: Expected '{}', got '{}'",
                name, expected, actual
            ),
        }
    }

    /// Captured command output, when the command ran.
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::Execution { .. } => None,
            Self::NoVersionFound { output } | Self::Mismatch { output, .. } => {
                Some(output.as_str())
            }
        }
    }
}

impl fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Execution { message } => write!(f, "execution failed: {}", message),
            Self::NoVersionFound { .. } => write!(f, "no version found"),
            Self::Mismatch {
                expected, actual, ..
            } => write!(f, "expected {}, got {}", expected, actual),
        }
    }
}

/// Result of checking one tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The extracted version matched.
    Passed { version: String },
    /// The check failed.
    Failed(CheckFailure),
}

impl CheckOutcome {
    /// Whether the check passed.
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed { .. })
    }
}

/// Outcome of one tool, labeled with its configured name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Tool name from the configuration.
    pub name: String,
    /// What happened.
    pub outcome: CheckOutcome,
}

/// Results of a full run, in configuration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// One report per configured tool.
    pub reports: Vec<CheckReport>,
}

impl RunSummary {
    /// Whether every check passed. True for an empty run.
    pub fn all_passed(&self) -> bool {
        self.reports.iter().all(|r| r.outcome.is_passed())
    }

    /// Reports of failed checks.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &CheckFailure)> {
        self.reports.iter().filter_map(|r| match &r.outcome {
            CheckOutcome::Failed(failure) => Some((r.name.as_str(), failure)),
            CheckOutcome::Passed { .. } => None,
        })
    }

    /// Number of passed checks.
    pub fn passed_count(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_passed()).count()
    }

    /// Process exit code for this run.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(name: &str, outcome: CheckOutcome) -> CheckReport {
        CheckReport {
            name: name.to_string(),
            outcome,
        }
    }

    #[test]
    fn diagnostics_name_the_tool() {
        let exec = CheckFailure::Execution {
            message: "exit status 127".into(),
        };
        assert_eq!(
            exec.diagnostic("ErrorCommand"),
            "Error executing command for ErrorCommand: exit status 127"
        );

        let none = CheckFailure::NoVersionFound {
            output: "nothing here".into(),
        };
        assert_eq!(none.diagnostic("Tool"), "Tool: No version found in output");

        let mismatch = CheckFailure::Mismatch {
            expected: "1.22.3".into(),
            actual: "1.22.4".into(),
            output: "VersionMismatch 1.22.4".into(),
        };
        assert_eq!(
            mismatch.diagnostic("VersionMismatch"),
            "VersionMismatch version mismatch: Expected '1.22.3', got '1.22.4'"
        );
    }

    #[test]
    fn output_only_when_command_ran() {
        let exec = CheckFailure::Execution {
            message: "exit status 1".into(),
        };
        let none = CheckFailure::NoVersionFound {
            output: "raw".into(),
        };
        assert_eq!(exec.output(), None);
        assert_eq!(none.output(), Some("raw"));
    }

    #[test]
    fn display_is_short() {
        let mismatch = CheckFailure::Mismatch {
            expected: "2".into(),
            actual: "3".into(),
            output: String::new(),
        };
        assert_eq!(mismatch.to_string(), "expected 2, got 3");
    }

    #[test]
    fn empty_summary_passes() {
        let summary = RunSummary::default();
        assert!(summary.all_passed());
        assert_eq!(summary.exit_code(), 0);
    }

    #[test]
    fn any_failure_fails_the_run() {
        let summary = RunSummary {
            reports: vec![
                report(
                    "Go",
                    CheckOutcome::Passed {
                        version: "1.22.3".into(),
                    },
                ),
                report(
                    "Node",
                    CheckOutcome::Failed(CheckFailure::NoVersionFound {
                        output: String::new(),
                    }),
                ),
            ],
        };
        assert!(!summary.all_passed());
        assert_eq!(summary.exit_code(), 1);
        assert_eq!(summary.passed_count(), 1);

        let failures: Vec<_> = summary.failures().map(|(name, _)| name).collect();
        assert_eq!(failures, vec!["Node"]);
    }
}
