//! Configuration for rule-file discovery.
//!
//! The checks themselves are fixed; only how files are found and read is
//! configurable.

use std::path::PathBuf;

/// Extension of Cursor rule files.
pub const DEFAULT_RULE_EXTENSION: &str = "mdc";

/// Filesystem source options.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct FsSourceConfig {
    /// Directory (or single file) to scan. Defaults to the current directory.
    pub root: PathBuf,
    /// File extension that marks a rule file, without the leading dot.
    pub extension: String,
    /// Exclude patterns (glob format), matched against the full path and the file name.
    pub exclude: Vec<String>,
    /// Maximum file size in bytes (default: 10 MB).
    pub max_file_size: u64,
    /// Whether to follow symbolic links while walking (default: `false`).
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    pub max_depth: usize,
}

impl Default for FsSourceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            extension: DEFAULT_RULE_EXTENSION.to_owned(),
            exclude: Vec::new(),
            max_file_size: 10_485_760,
            follow_links: false,
            max_depth: 64,
        }
    }
}
