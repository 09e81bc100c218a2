//! Version token extraction.
//!
//! Tool output is unstructured, so extraction is driven by a small rule
//! table. Each [`ExtractionRule`] pairs a predicate over the command string
//! with a strategy for reading the output. The first matching rule wins;
//! commands no rule claims fall back to [`ExtractionStrategy::FirstMatch`].

use regex::Regex;
use std::sync::LazyLock;

/// Optional `v`, then one to three dot-separated ASCII digit groups.
static VERSION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v?([0-9]+(?:\.[0-9]+){0,2})").unwrap());

/// Controls which commands a rule applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandMatcher {
    /// Applies when the command text contains this substring.
    Contains(String),
}

impl CommandMatcher {
    /// Check whether this matcher claims the given command.
    pub fn matches(&self, command: &str) -> bool {
        match self {
            CommandMatcher::Contains(needle) => command.contains(needle.as_str()),
        }
    }
}

/// How a version token is read out of command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionStrategy {
    /// First token anywhere in the output.
    FirstMatch,
    /// First token on the first line containing the label. No such line
    /// means no version, even if other lines carry version-like tokens.
    LabeledLine(String),
}

impl ExtractionStrategy {
    /// Apply this strategy to command output.
    pub fn apply(&self, output: &str) -> Option<String> {
        match self {
            ExtractionStrategy::FirstMatch => first_token(output),
            ExtractionStrategy::LabeledLine(label) => output
                .lines()
                .find(|line| line.contains(label.as_str()))
                .and_then(first_token),
        }
    }
}

/// A tool-specific extraction override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionRule {
    /// Rule name (for debugging).
    pub name: String,
    /// When this rule fires.
    pub matcher: CommandMatcher,
    /// How to read the version once it fires.
    pub strategy: ExtractionStrategy,
}

impl ExtractionRule {
    /// Rule that fires for commands containing `needle`.
    pub fn command_contains(name: &str, needle: &str, strategy: ExtractionStrategy) -> Self {
        Self {
            name: name.to_string(),
            matcher: CommandMatcher::Contains(needle.to_string()),
            strategy,
        }
    }
}

/// Built-in overrides.
///
/// rsync version probes print a protocol version ahead of the tool
/// version (`openrsync: protocol version 29`), so only the line labeled
/// `rsync version` is read.
fn builtin_rules() -> Vec<ExtractionRule> {
    vec![ExtractionRule::command_contains(
        "rsync",
        "rsync",
        ExtractionStrategy::LabeledLine("rsync version".to_string()),
    )]
}

/// Extracts version tokens from command output using a rule table.
#[derive(Debug, Clone)]
pub struct VersionExtractor {
    rules: Vec<ExtractionRule>,
}

impl Default for VersionExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionExtractor {
    /// Create an extractor with the built-in rule table.
    pub fn new() -> Self {
        Self {
            rules: builtin_rules(),
        }
    }

    /// Create an extractor with no overrides at all.
    pub fn generic() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a rule. Added rules take precedence over earlier ones.
    pub fn with_rule(mut self, rule: ExtractionRule) -> Self {
        self.rules.insert(0, rule);
        self
    }

    /// The rules in the order they are consulted.
    pub fn rules(&self) -> &[ExtractionRule] {
        &self.rules
    }

    /// Find the strategy that applies to a command.
    pub fn strategy_for(&self, command: &str) -> &ExtractionStrategy {
        static DEFAULT: ExtractionStrategy = ExtractionStrategy::FirstMatch;

        self.rules
            .iter()
            .find(|rule| rule.matcher.matches(command))
            .map(|rule| {
                tracing::trace!("Extraction rule '{}' matched '{}'", rule.name, command);
                &rule.strategy
            })
            .unwrap_or(&DEFAULT)
    }

    /// Extract the version token for `command` from its `output`.
    ///
    /// Returns `None` when no token is found. The returned token contains
    /// only digits and dots.
    pub fn extract(&self, command: &str, output: &str) -> Option<String> {
        self.strategy_for(command).apply(output)
    }
}

/// Extract a version using the built-in rule table.
pub fn extract_version(command: &str, output: &str) -> Option<String> {
    VersionExtractor::new().extract(command, output)
}

fn first_token(text: &str) -> Option<String> {
    VERSION_TOKEN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
