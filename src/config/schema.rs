//! Configuration schema.
//!
//! ```yaml
//! tools:
//!   - name: Go
//!     command: go version
//!     expect: "1.22.3"
//! ```

use serde::{Deserialize, Serialize};

/// Root configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionConfig {
    /// Tools to verify, checked in declaration order.
    #[serde(default)]
    pub tools: Vec<ToolSpec>,
}

/// One tool whose reported version is verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Display label used in diagnostics.
    pub name: String,

    /// Shell command whose combined output carries the version.
    pub command: String,

    /// Expected version in dot-separated form (e.g. `1.22.3`).
    pub expect: String,
}

impl ToolSpec {
    /// Create a tool spec.
    pub fn new(name: &str, command: &str, expect: &str) -> Self {
        Self {
            name: name.to_string(),
            command: command.to_string(),
            expect: expect.to_string(),
        }
    }
}
