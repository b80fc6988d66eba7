//! # mdc-batch
//!
//! Keeps the shared Cursor rules current across many projects.
//!
//! Projects mount the rules repository as a git submodule at `.cursor/rules`.
//! This crate finds such projects under a common parent directory and runs the
//! `cursor-rules` update script in each of them, one after another.

pub mod discover;
pub mod script;
pub mod update;

pub use discover::{
    RULES_SUBMODULE_PATH, find_projects, gitmodules_declares_rules, has_rules_submodule,
    is_git_repo,
};
pub use script::{SCRIPT_NAME, candidate_locations, find_update_script};
pub use update::{UpdateOutcome, run_update};
