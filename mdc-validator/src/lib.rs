//! # mdc-validator
//!
//! Frontmatter and structure validator for Cursor `.mdc` rule files.
//!
//! The **core checks** (`validate_content`) work on text and know nothing about
//! the filesystem; the **filesystem strategy** (`validate_fs`) discovers files,
//! reads them and aggregates one result per file into a report.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use mdc_validator::{validate_fs, FsSourceConfig};
//!
//! let mut config = FsSourceConfig::default();
//! config.root = PathBuf::from(".cursor/rules");
//! config.exclude = vec!["drafts/*".to_owned()];
//!
//! let report = validate_fs(&config).unwrap();
//! println!("Files checked: {}", report.total_files);
//! println!("Invalid files: {}", report.invalid_files);
//! println!("OK: {}", report.ok);
//! ```

mod config;
mod error;
mod format;
pub mod output;
mod report;
mod rule_file;
mod strategy;
mod validator;

pub use config::{DEFAULT_RULE_EXTENSION, FsSourceConfig};
pub use error::{Violation, ViolationKind};
pub use format::frontmatter::{DELIMITER, Sections, parse_frontmatter, split_sections};
pub use report::{ValidationReport, ValidationResult};
pub use rule_file::RuleFile;
pub use strategy::fs::validate_file;
pub use validator::{check_fields, validate_content};

use strategy::fs::{
    Discovery, compile_exclude_patterns, display_path, find_files, validate_file_as,
};

/// Validate every rule file under `config.root`.
///
/// This is the primary public API. Files are reported in lexicographic path
/// order, with paths relative to the root.
///
/// # Errors
///
/// Returns an error if the root does not exist, the extension is empty, or an
/// exclude pattern is not a valid glob. Per-file problems (unreadable files,
/// malformed frontmatter, missing fields) never fail the call; they are
/// recorded in the report.
pub fn validate_fs(config: &FsSourceConfig) -> anyhow::Result<ValidationReport> {
    if !config.root.exists() {
        anyhow::bail!("Path does not exist: {}", config.root.display());
    }
    if config.extension.is_empty() {
        anyhow::bail!("Rule file extension must not be empty");
    }
    let exclude_patterns = compile_exclude_patterns(&config.exclude)?;

    let Discovery { files, failures } = find_files(config, &exclude_patterns);
    tracing::info!(
        root = %config.root.display(),
        files = files.len(),
        "discovered rule files"
    );

    let mut results = failures;
    for file_path in &files {
        let shown = display_path(file_path, &config.root);
        let result = validate_file_as(file_path, &shown, config.max_file_size);
        tracing::debug!(
            path = %result.path.display(),
            valid = result.valid,
            violations = result.violations.len(),
            "validated"
        );
        results.push(result);
    }

    results.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(ValidationReport::from_results(config.root.clone(), results))
}
