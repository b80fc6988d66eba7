//! Running the update script in a project.

use std::path::Path;
use std::process::Command;

/// What happened when updating one project.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UpdateOutcome {
    /// Dry run: nothing was executed.
    DryRun,
    /// The script exited successfully.
    Updated {
        /// Captured standard output.
        stdout: String,
    },
    /// The script ran and exited with a failure status.
    Failed {
        /// Exit code, `None` when killed by a signal.
        code: Option<i32>,
        /// Captured standard error.
        stderr: String,
    },
    /// The script could not be started.
    SpawnFailed {
        /// Spawn error text.
        error: String,
    },
}

impl UpdateOutcome {
    /// Whether this outcome counts towards the success total.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::DryRun | Self::Updated { .. })
    }
}

/// Run `<script> <project>` with `project` as the working directory.
///
/// In dry-run mode nothing is spawned.
#[must_use]
pub fn run_update(project: &Path, script: &Path, dry_run: bool) -> UpdateOutcome {
    if dry_run {
        return UpdateOutcome::DryRun;
    }

    tracing::info!(project = %project.display(), script = %script.display(), "running update");
    match Command::new(script)
        .arg(project)
        .current_dir(project)
        .output()
    {
        Ok(out) if out.status.success() => UpdateOutcome::Updated {
            stdout: String::from_utf8_lossy(&out.stdout).into_owned(),
        },
        Ok(out) => UpdateOutcome::Failed {
            code: out.status.code(),
            stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
        },
        Err(e) => UpdateOutcome::SpawnFailed {
            error: e.to_string(),
        },
    }
}
