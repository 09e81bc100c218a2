//! Version comparison.
//!
//! Versions are compared component by component as plain strings, and the
//! component counts must agree. `1.22` does not satisfy `1.22.3`, and `02`
//! is not the same component as `2`.

/// Outcome of comparing an extracted version with an expected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionComparison {
    /// Every component matches and the counts agree.
    Match,
    /// The component at `index` differs.
    ComponentMismatch { index: usize },
    /// The shared prefix matches but the component counts differ.
    LengthMismatch { extracted: usize, expected: usize },
}

impl VersionComparison {
    /// Whether the versions are considered equal.
    pub fn is_match(&self) -> bool {
        matches!(self, Self::Match)
    }
}

/// Compare an extracted version against the expected version.
pub fn compare_versions(extracted: &str, expected: &str) -> VersionComparison {
    let extracted_parts: Vec<&str> = extracted.split('.').collect();
    let expected_parts: Vec<&str> = expected.split('.').collect();

    for (index, (e, x)) in extracted_parts.iter().zip(&expected_parts).enumerate() {
        if e != x {
            return VersionComparison::ComponentMismatch { index };
        }
    }

    if extracted_parts.len() == expected_parts.len() {
        VersionComparison::Match
    } else {
        VersionComparison::LengthMismatch {
            extracted: extracted_parts.len(),
            expected: expected_parts.len(),
        }
    }
}

/// Boolean shorthand for [`compare_versions`].
pub fn versions_match(extracted: &str, expected: &str) -> bool {
    compare_versions(extracted, expected).is_match()
}
