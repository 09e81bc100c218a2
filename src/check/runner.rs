//! Sequential check evaluation.

use crate::config::ToolSpec;
use crate::shell;
use crate::ui::UserInterface;
use crate::version::{compare_versions, VersionExtractor};

use super::outcome::{CheckFailure, CheckOutcome, CheckReport, RunSummary};

/// Summary line printed when every check passes.
pub const ALL_PASSED_MESSAGE: &str = "Versions OK";

/// Runs tool checks one after another.
#[derive(Debug, Clone, Default)]
pub struct CheckRunner {
    extractor: VersionExtractor,
}

impl CheckRunner {
    /// Create a runner with the built-in extraction rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner with a custom extractor.
    pub fn with_extractor(extractor: VersionExtractor) -> Self {
        Self { extractor }
    }

    /// Run the tool's command and evaluate its output.
    pub fn check_tool(&self, tool: &ToolSpec) -> CheckOutcome {
        tracing::debug!("Checking {}: {}", tool.name, tool.command);

        match shell::execute(&tool.command) {
            Ok(output) => self.evaluate(tool, &output.combined()),
            Err(e) => CheckOutcome::Failed(CheckFailure::Execution {
                message: e.to_string(),
            }),
        }
    }

    /// Evaluate already-captured, trimmed command output for a tool.
    pub fn evaluate(&self, tool: &ToolSpec, output: &str) -> CheckOutcome {
        tracing::trace!("{} output: {:?}", tool.name, output);

        let Some(version) = self.extractor.extract(&tool.command, output) else {
            return CheckOutcome::Failed(CheckFailure::NoVersionFound {
                output: output.to_string(),
            });
        };

        let comparison = compare_versions(&version, &tool.expect);
        tracing::debug!(
            "{}: extracted '{}', expected '{}': {:?}",
            tool.name,
            version,
            tool.expect,
            comparison
        );

        if comparison.is_match() {
            CheckOutcome::Passed { version }
        } else {
            CheckOutcome::Failed(CheckFailure::Mismatch {
                expected: tool.expect.clone(),
                actual: version,
                output: output.to_string(),
            })
        }
    }

    /// Check every tool, reporting failures as they occur.
    ///
    /// Prints [`ALL_PASSED_MESSAGE`] once all checks are done if none failed.
    pub fn run(&self, tools: &[ToolSpec], ui: &mut dyn UserInterface) -> RunSummary {
        let mut summary = RunSummary::default();

        for tool in tools {
            let outcome = self.check_tool(tool);
            if let CheckOutcome::Failed(failure) = &outcome {
                tracing::debug!("{} failed: {}", tool.name, failure);
                report_failure(ui, &tool.name, failure);
            }
            summary.reports.push(CheckReport {
                name: tool.name.clone(),
                outcome,
            });
        }

        tracing::debug!(
            "{} of {} check(s) passed",
            summary.passed_count(),
            summary.reports.len()
        );

        if summary.all_passed() {
            ui.success(ALL_PASSED_MESSAGE);
        }

        summary
    }
}

fn report_failure(ui: &mut dyn UserInterface, name: &str, failure: &CheckFailure) {
    ui.error(&failure.diagnostic(name));
    if let Some(output) = failure.output() {
        ui.detail(&format!("Command output: {}", output));
    }
}
