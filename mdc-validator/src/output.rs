//! Output formatting for validation reports.
//!
//! Provides JSON and plain-text formatters for `ValidationReport`.
//! Both are deterministic: the same report always renders to the same bytes.

use std::io::Write;

use crate::report::ValidationReport;

/// Title line of the human-readable report.
pub const REPORT_TITLE: &str = "MDC File Validation Report";

const RULE_WIDTH: usize = 60;

/// Format a `ValidationReport` as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a `ValidationReport` as human-readable plain text to a writer.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &ValidationReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let rule = "=".repeat(RULE_WIDTH);
    writeln!(writer, "{REPORT_TITLE}")?;
    writeln!(writer, "{rule}")?;
    writeln!(writer, "Total files checked: {}", report.total_files)?;
    writeln!(writer, "Valid files: {}", report.valid_files)?;
    writeln!(writer, "Invalid files: {}", report.invalid_files)?;
    writeln!(writer, "{rule}")?;
    writeln!(writer)?;

    if report.ok {
        writeln!(writer, "\u{2713} All files are valid!")?;
        return Ok(());
    }

    writeln!(writer, "Files with validation errors:")?;
    writeln!(writer)?;
    for result in report.invalid_results() {
        writeln!(writer, "  {}:", result.path.display())?;
        for violation in &result.violations {
            writeln!(writer, "    - {violation}")?;
        }
        writeln!(writer)?;
    }

    Ok(())
}
