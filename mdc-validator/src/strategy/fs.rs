//! Filesystem validation source.
//!
//! Discovers rule files on disk and reads them for the validation pipeline.
//! - Symlinks are not followed by default (`follow_links: false`)
//! - Device files, pipes, and sockets are skipped
//! - Maximum directory depth is enforced
//! - Reads are bounded by `max_file_size`

use std::io::Read;
use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::config::FsSourceConfig;
use crate::error::Violation;
use crate::report::ValidationResult;
use crate::validator::validate_content;

/// Directories to skip
pub const SKIP_DIRS: &[&str] = &[".git"];

/// Files found by a directory walk.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Rule files ready to read, sorted by path.
    pub files: Vec<PathBuf>,
    /// Entries the walk could not visit, already turned into invalid results.
    pub failures: Vec<ValidationResult>,
}

/// Compile exclude globs.
///
/// # Errors
///
/// Returns an error naming the first pattern that does not parse.
pub fn compile_exclude_patterns(patterns: &[String]) -> anyhow::Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|pat| {
            Pattern::new(pat)
                .map_err(|e| anyhow::anyhow!("Invalid exclude glob pattern '{pat}': {e}"))
        })
        .collect()
}

/// Check if a path matches any of the exclude patterns.
///
/// A pattern may match the path as walked, the path relative to `root`, or
/// the bare file name, so `drafts/*` works whatever form the root is given in.
fn matches_exclude(path: &Path, root: &Path, exclude_patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    let relative = display_path(path, root);
    let relative_str = relative.to_string_lossy();
    exclude_patterns.iter().any(|pattern| {
        pattern.matches(&path_str)
            || pattern.matches(&relative_str)
            || path
                .file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
    })
}

/// Returns `true` if the entry should be **included** (i.e., is NOT a skip dir).
fn is_not_skip_dir(entry: &walkdir::DirEntry) -> bool {
    if entry.depth() > 0
        && entry.file_type().is_dir()
        && let Some(name) = entry.file_name().to_str()
    {
        return !SKIP_DIRS.contains(&name);
    }
    true
}

fn has_rule_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == extension)
}

/// Path as shown in reports: relative to `root` when it lies under it.
#[must_use]
pub fn display_path(path: &Path, root: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel.to_path_buf(),
        _ => path.to_path_buf(),
    }
}

/// Find all rule files under `config.root`.
///
/// Walk errors (permission denied, loops) are never dropped: each one becomes
/// an invalid result for the offending path.
pub fn find_files(config: &FsSourceConfig, exclude_patterns: &[Pattern]) -> Discovery {
    let root = &config.root;
    let mut discovery = Discovery::default();

    if root.is_file() {
        if has_rule_extension(root, &config.extension)
            && !matches_exclude(root, root, exclude_patterns)
        {
            discovery.files.push(root.clone());
        }
        return discovery;
    }

    for entry_result in WalkDir::new(root)
        .follow_links(config.follow_links)
        .max_depth(config.max_depth)
        .into_iter()
        .filter_entry(is_not_skip_dir)
    {
        let entry = match entry_result {
            Ok(e) => e,
            Err(walk_err) => {
                let path = walk_err
                    .path()
                    .map_or_else(|| root.clone(), Path::to_path_buf);
                tracing::warn!(path = %path.display(), "directory traversal error: {walk_err}");
                discovery.failures.push(ValidationResult::new(
                    display_path(&path, root),
                    vec![Violation::Unreadable {
                        reason: format!("directory traversal error: {walk_err}"),
                    }],
                ));
                continue;
            }
        };

        let file_path = entry.path();

        if !file_path.is_file() {
            continue;
        }

        // Skip devices, pipes, sockets — only regular files
        #[cfg(unix)]
        {
            use std::os::unix::fs::FileTypeExt;
            if let Ok(ft) = entry.metadata().map(|m| m.file_type())
                && (ft.is_block_device() || ft.is_char_device() || ft.is_fifo() || ft.is_socket())
            {
                continue;
            }
        }

        if !has_rule_extension(file_path, &config.extension) {
            continue;
        }

        if matches_exclude(file_path, root, exclude_patterns) {
            tracing::debug!(path = %file_path.display(), "excluded");
            continue;
        }

        tracing::debug!(path = %file_path.display(), "discovered rule file");
        discovery.files.push(file_path.to_path_buf());
    }

    discovery.files.sort();
    discovery.files.dedup();
    discovery
}

/// Read a file using a bounded streaming read, enforcing `max_file_size`.
///
/// Reads at most `max_file_size + 1` bytes so an oversized file is detected
/// without loading it whole.
///
/// # Errors
///
/// Returns a violation if the file cannot be opened or read, exceeds
/// `max_file_size`, or is not valid UTF-8.
pub fn read_file_bounded(path: &Path, max_file_size: u64) -> Result<String, Violation> {
    let file = std::fs::File::open(path).map_err(|e| Violation::Unreadable {
        reason: e.to_string(),
    })?;

    let mut buffer = Vec::new();
    file.take(max_file_size.saturating_add(1))
        .read_to_end(&mut buffer)
        .map_err(|e| Violation::Unreadable {
            reason: e.to_string(),
        })?;

    if buffer.len() as u64 > max_file_size {
        return Err(Violation::FileTooLarge {
            limit: max_file_size,
        });
    }

    String::from_utf8(buffer).map_err(|_| Violation::InvalidEncoding)
}

/// Read and validate a single rule file.
///
/// Read failures are reported as the file's only violation.
#[must_use]
pub fn validate_file(path: &Path, max_file_size: u64) -> ValidationResult {
    validate_file_as(path, path, max_file_size)
}

/// Read the file at `path` and validate it, reporting it as `shown`.
#[must_use]
pub(crate) fn validate_file_as(
    path: &Path,
    shown: &Path,
    max_file_size: u64,
) -> ValidationResult {
    match read_file_bounded(path, max_file_size) {
        Ok(content) => validate_content(shown, &content),
        Err(violation) => {
            tracing::warn!(path = %path.display(), "{violation}");
            ValidationResult::new(shown.to_path_buf(), vec![violation])
        }
    }
}
