//! Tool version checks.
//!
//! A check runs one tool's command, extracts a version from its output and
//! compares it with the expected version. Every configured tool is checked,
//! in order, even after earlier failures.
//!
//! - [`outcome`] - Per-check results and the run summary
//! - [`runner`] - Sequential evaluation and reporting

pub mod outcome;
pub mod runner;

pub use outcome::{CheckFailure, CheckOutcome, CheckReport, RunSummary};
pub use runner::CheckRunner;
