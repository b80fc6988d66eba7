//! Frontmatter splitting and parsing.
//!
//! A rule file looks like:
//!
//! ```text
//! ---
//! description: ...
//! globs: []
//! alwaysApply: false
//! ---
//!
//! # Heading
//! body...
//! ```
//!
//! [`split_sections`] enforces that layout and stops at the first problem,
//! since the header cannot be located reliably on a malformed file.
//! [`parse_frontmatter`] then turns the header into a mapping.

use serde_json::{Map, Value};

use crate::error::Violation;

/// Line that opens and closes the frontmatter block.
pub const DELIMITER: &str = "---";

/// A rule file split into its header text and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections {
    /// Text strictly between the two delimiter lines.
    pub header: String,
    /// Everything after the blank line that follows the closing delimiter.
    pub body: String,
}

/// Check the header/body layout and split the file.
///
/// Checks, in order: opening delimiter on the first line, a closing delimiter
/// later on, an empty line right after it, and a first non-blank content line
/// starting with `#`. A leading byte-order mark is ignored.
///
/// # Errors
///
/// Returns the first structural [`Violation`] found.
pub fn split_sections(content: &str) -> Result<Sections, Violation> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let lines: Vec<&str> = content.lines().collect();

    if lines.first().copied() != Some(DELIMITER) {
        return Err(Violation::MissingOpeningDelimiter);
    }

    let close = lines
        .iter()
        .skip(1)
        .position(|line| *line == DELIMITER)
        .map(|idx| idx + 1)
        .ok_or(Violation::MissingClosingDelimiter)?;

    let after = &lines[close + 1..];
    if after.first().is_none_or(|line| !line.is_empty()) {
        return Err(Violation::MissingBlankLine);
    }

    let content_lines = &after[1..];
    let starts_with_heading = content_lines
        .iter()
        .find(|line| !line.trim().is_empty())
        .is_some_and(|line| line.trim_start().starts_with('#'));
    if !starts_with_heading {
        return Err(Violation::MissingHeading);
    }

    Ok(Sections {
        header: lines[1..close].join("\n"),
        body: content_lines.join("\n"),
    })
}

/// Parse the header text as a YAML mapping.
///
/// An empty header (or one holding only comments) is an empty mapping.
///
/// # Errors
///
/// Returns [`Violation::InvalidSyntax`] for malformed YAML or a document that
/// is not a mapping.
pub fn parse_frontmatter(header: &str) -> Result<Map<String, Value>, Violation> {
    if header.trim().is_empty() {
        return Ok(Map::new());
    }

    match serde_saphyr::from_str::<Value>(header) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(Value::Null) => Ok(Map::new()),
        Ok(other) => Err(Violation::InvalidSyntax {
            reason: format!("expected a mapping, found {}", value_type_name(&other)),
        }),
        Err(e) => Err(Violation::InvalidSyntax {
            reason: e.to_string(),
        }),
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
