//! Validation report types.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::Violation;

/// Outcome of validating one rule file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct ValidationResult {
    /// Path of the rule file, relative to the scan root when possible.
    pub path: PathBuf,
    /// `true` iff `violations` is empty.
    pub valid: bool,
    /// Violations in the order they were detected.
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    #[must_use]
    pub fn new(path: PathBuf, violations: Vec<Violation>) -> Self {
        Self {
            path,
            valid: violations.is_empty(),
            violations,
        }
    }
}

/// Result of a validation run.
///
/// `valid_files + invalid_files == total_files == results.len()` always holds.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct ValidationReport {
    /// Root the scan started from.
    pub root: PathBuf,
    /// Number of rule files discovered (including unreadable ones).
    pub total_files: usize,
    /// Number of files with no violations.
    pub valid_files: usize,
    /// Number of files with at least one violation.
    pub invalid_files: usize,
    /// Whether every file passed.
    pub ok: bool,
    /// One entry per discovered file, sorted by path.
    pub results: Vec<ValidationResult>,
}

impl ValidationReport {
    /// Aggregate per-file results into a report.
    #[must_use]
    pub fn from_results(root: PathBuf, results: Vec<ValidationResult>) -> Self {
        let valid_files = results.iter().filter(|r| r.valid).count();
        let invalid_files = results.len() - valid_files;
        Self {
            root,
            total_files: results.len(),
            valid_files,
            invalid_files,
            ok: invalid_files == 0,
            results,
        }
    }

    /// Results that carry at least one violation, in report order.
    pub fn invalid_results(&self) -> impl Iterator<Item = &ValidationResult> {
        self.results.iter().filter(|r| !r.valid)
    }

    /// Process exit status for this report: `0` when all files are valid, `1` otherwise.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        u8::from(!self.ok)
    }
}
