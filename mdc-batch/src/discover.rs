//! Discovery of projects that mount the rules as a git submodule.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;

/// Where projects mount the shared rules repository.
pub const RULES_SUBMODULE_PATH: &str = ".cursor/rules";

/// Whether `dir` is a git working tree (`.git` may be a directory or a file).
#[must_use]
pub fn is_git_repo(dir: &Path) -> bool {
    dir.join(".git").exists()
}

/// Whether `dir` has `.cursor/rules` registered as a git submodule.
///
/// Asks `git submodule status`; when `git` cannot be spawned at all, falls
/// back to looking for the path in `.gitmodules`.
#[must_use]
pub fn has_rules_submodule(dir: &Path) -> bool {
    if !dir.join(RULES_SUBMODULE_PATH).exists() {
        return false;
    }

    match Command::new("git")
        .args(["submodule", "status", RULES_SUBMODULE_PATH])
        .current_dir(dir)
        .output()
    {
        Ok(out) => out.status.success() && !out.stdout.trim_ascii().is_empty(),
        Err(e) => {
            tracing::debug!(dir = %dir.display(), "git not available ({e}), reading .gitmodules");
            gitmodules_declares_rules(dir)
        }
    }
}

/// Whether `dir/.gitmodules` mentions the rules submodule path.
#[must_use]
pub fn gitmodules_declares_rules(dir: &Path) -> bool {
    fs::read_to_string(dir.join(".gitmodules")).is_ok_and(|content| content.contains("cursor/rules"))
}

/// List the immediate subdirectories of `projects_dir` that carry the rules submodule.
///
/// Hidden directories and non-git directories are skipped. The result is
/// sorted by path.
///
/// # Errors
///
/// Returns an error if `projects_dir` cannot be listed.
pub fn find_projects(projects_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries = fs::read_dir(projects_dir)
        .with_context(|| format!("Failed to read projects directory {}", projects_dir.display()))?;

    let mut projects = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read entry in {}", projects_dir.display()))?;
        let path = entry.path();

        if !path.is_dir() || entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        if !is_git_repo(&path) {
            tracing::debug!(dir = %path.display(), "not a git repository");
            continue;
        }
        if has_rules_submodule(&path) {
            projects.push(path);
        } else {
            tracing::debug!(dir = %path.display(), "no rules submodule");
        }
    }

    projects.sort();
    Ok(projects)
}
