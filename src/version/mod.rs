//! Version extraction and comparison.
//!
//! - [`extract`] - Locate a version token in raw command output
//! - [`compare`] - Decide whether an extracted version satisfies an expectation
//!
//! # Example
//!
//! ```
//! use version_checker::version::{extract_version, versions_match};
//!
//! let found = extract_version("go version", "go version go1.22.3 linux/amd64").unwrap();
//! assert_eq!(found, "1.22.3");
//! assert!(versions_match(&found, "1.22.3"));
//! assert!(!versions_match(&found, "1.22"));
//! ```

pub mod compare;
pub mod extract;

pub use compare::{compare_versions, versions_match, VersionComparison};
pub use extract::{
    extract_version, CommandMatcher, ExtractionRule, ExtractionStrategy, VersionExtractor,
};
