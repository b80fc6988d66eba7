//! Core validation: input-agnostic checks on rule-file content.

use std::path::Path;

use crate::error::Violation;
use crate::report::ValidationResult;
use crate::rule_file::RuleFile;

/// Check the required frontmatter fields of a parsed rule file.
///
/// Every field is checked; the returned list holds one violation per bad field,
/// in the order `description`, `globs`, `alwaysApply`.
#[must_use]
pub fn check_fields(rule: &RuleFile) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !rule.description().is_some_and(|d| !d.trim().is_empty()) {
        violations.push(Violation::InvalidDescription);
    }
    if rule.globs().is_none() {
        violations.push(Violation::InvalidGlobs);
    }
    if rule.always_apply().is_none() {
        violations.push(Violation::InvalidAlwaysApply);
    }

    violations
}

/// Validate rule-file content that has already been read.
///
/// Structural and syntax problems short-circuit with a single violation;
/// field problems are all collected.
#[must_use]
pub fn validate_content(path: &Path, content: &str) -> ValidationResult {
    let violations = match RuleFile::parse(path, content) {
        Ok(rule) => check_fields(&rule),
        Err(violation) => {
            if let Some(detail) = violation.detail() {
                tracing::debug!(path = %path.display(), detail, "frontmatter parse failed");
            }
            vec![violation]
        }
    };
    ValidationResult::new(path.to_path_buf(), violations)
}
