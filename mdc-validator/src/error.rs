//! Violation types for rule-file validation.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// Broad category of a [`Violation`].
#[derive(Debug, Clone, Copy, serde::Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ViolationKind {
    /// The file could not be read (I/O error, size limit, encoding).
    Io,
    /// The header/body layout is wrong; parsing was not attempted.
    Structure,
    /// The frontmatter block is not a valid YAML mapping.
    Syntax,
    /// A required frontmatter field is absent or has the wrong shape.
    Field,
}

/// A single nonconformance of a rule file.
///
/// The `Display` text is the message shown in reports.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Violation {
    /// The file could not be opened or read, or the directory walk failed on it.
    #[error("error reading file: {reason}")]
    Unreadable {
        /// Underlying I/O error text.
        reason: String,
    },
    /// The file is larger than the configured maximum.
    #[error("file exceeds maximum size of {limit} bytes")]
    FileTooLarge {
        /// Configured limit in bytes.
        limit: u64,
    },
    /// The file content is not valid UTF-8.
    #[error("file is not valid UTF-8")]
    InvalidEncoding,
    #[error("missing opening delimiter")]
    MissingOpeningDelimiter,
    #[error("missing closing delimiter")]
    MissingClosingDelimiter,
    #[error("missing blank line after frontmatter")]
    MissingBlankLine,
    #[error("content must start with a heading")]
    MissingHeading,
    /// The frontmatter is malformed YAML or not a mapping.
    #[error("invalid frontmatter syntax")]
    InvalidSyntax {
        /// Parser message, kept out of the report line.
        reason: String,
    },
    #[error("description missing or empty")]
    InvalidDescription,
    #[error("globs missing or not an array")]
    InvalidGlobs,
    #[error("alwaysApply missing or not boolean")]
    InvalidAlwaysApply,
}

impl Violation {
    /// Category of this violation.
    #[must_use]
    pub fn kind(&self) -> ViolationKind {
        match self {
            Self::Unreadable { .. } | Self::FileTooLarge { .. } | Self::InvalidEncoding => {
                ViolationKind::Io
            }
            Self::MissingOpeningDelimiter
            | Self::MissingClosingDelimiter
            | Self::MissingBlankLine
            | Self::MissingHeading => ViolationKind::Structure,
            Self::InvalidSyntax { .. } => ViolationKind::Syntax,
            Self::InvalidDescription | Self::InvalidGlobs | Self::InvalidAlwaysApply => {
                ViolationKind::Field
            }
        }
    }

    /// Extra detail that is not part of the message (parser errors).
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::InvalidSyntax { reason } => Some(reason),
            _ => None,
        }
    }
}

impl Serialize for Violation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Violation", 3)?;
        state.serialize_field("kind", &self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.serialize_field("detail", &self.detail())?;
        state.end()
    }
}
