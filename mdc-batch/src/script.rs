//! Locating the `cursor-rules` update script.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// File name of the update script.
pub const SCRIPT_NAME: &str = "cursor-rules";

/// Places to look for the script, in priority order: every `PATH` entry, then
/// `~/.local/bin`, `/usr/local/bin`, `/usr/bin` and the current directory.
#[must_use]
pub fn candidate_locations(path_var: Option<&OsStr>, home: Option<&Path>) -> Vec<PathBuf> {
    let mut locations: Vec<PathBuf> = path_var
        .map(|paths| {
            std::env::split_paths(paths)
                .filter(|dir| !dir.as_os_str().is_empty())
                .map(|dir| dir.join(SCRIPT_NAME))
                .collect()
        })
        .unwrap_or_default();

    if let Some(home) = home {
        locations.push(home.join(".local").join("bin").join(SCRIPT_NAME));
    }
    locations.push(Path::new("/usr/local/bin").join(SCRIPT_NAME));
    locations.push(Path::new("/usr/bin").join(SCRIPT_NAME));
    locations.push(PathBuf::from(SCRIPT_NAME));
    locations
}

/// Find the update script using `PATH` and `HOME` from the environment.
#[must_use]
pub fn find_update_script() -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH");
    let home = std::env::var_os("HOME").map(PathBuf::from);

    candidate_locations(path_var.as_deref(), home.as_deref())
        .into_iter()
        .find(|candidate| candidate.is_file())
}
