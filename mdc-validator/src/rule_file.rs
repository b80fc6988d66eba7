//! Parsed rule file.

use std::path::PathBuf;

use serde_json::{Map, Value};

use crate::error::Violation;
use crate::format::frontmatter::{parse_frontmatter, split_sections};

/// A rule file whose layout and frontmatter syntax are valid.
///
/// Required fields are not checked here; see [`crate::check_fields`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct RuleFile {
    /// Path the file was read from, as reported.
    pub path: PathBuf,
    /// Full file content.
    pub raw_content: String,
    /// Header between the delimiters, parsed as a YAML mapping.
    pub frontmatter: Map<String, Value>,
    /// Lines after the blank line that follows the header.
    pub body: String,
}

impl RuleFile {
    /// Split and parse `content` read from `path`.
    ///
    /// # Errors
    ///
    /// Returns the first structural violation, or [`Violation::InvalidSyntax`]
    /// when the header is not a YAML mapping.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self, Violation> {
        let sections = split_sections(content)?;
        let frontmatter = parse_frontmatter(&sections.header)?;
        Ok(Self {
            path: path.into(),
            raw_content: content.to_owned(),
            frontmatter,
            body: sections.body,
        })
    }

    /// The `description` value, if it is a string.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.frontmatter.get("description").and_then(Value::as_str)
    }

    /// The `globs` list, if present and made only of strings.
    #[must_use]
    pub fn globs(&self) -> Option<Vec<&str>> {
        self.frontmatter
            .get("globs")
            .and_then(Value::as_array)
            .and_then(|items| items.iter().map(Value::as_str).collect())
    }

    /// The `alwaysApply` value, if it is a boolean.
    #[must_use]
    pub fn always_apply(&self) -> Option<bool> {
        self.frontmatter.get("alwaysApply").and_then(Value::as_bool)
    }
}
