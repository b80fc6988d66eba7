//! Integration tests for `mdc_validator::validate_fs`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use mdc_validator::{FsSourceConfig, ValidationReport, Violation, validate_fs};
use tempfile::TempDir;

const VALID_RULE: &str = "\
---
description: Rust error handling conventions
globs:
  - \"**/*.rs\"
alwaysApply: false
---

# Error handling

Propagate errors with `?`.
";

fn fs_config(root: &Path) -> FsSourceConfig {
    let mut cfg = FsSourceConfig::default();
    cfg.root = root.to_path_buf();
    cfg
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn render_human(report: &ValidationReport) -> String {
    let mut buf = Vec::new();
    mdc_validator::output::write_human(report, &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_validate_fs_nonexistent_root_errors() {
    let tmp = TempDir::new().unwrap();
    let result = validate_fs(&fs_config(&tmp.path().join("does_not_exist")));
    assert!(result.is_err());
    let msg = result.unwrap_err().to_string();
    assert!(msg.contains("does not exist"), "got: {msg}");
}

#[test]
fn test_validate_fs_invalid_exclude_errors() {
    let tmp = TempDir::new().unwrap();
    let mut cfg = fs_config(tmp.path());
    cfg.exclude = vec!["[oops".to_owned()];
    let msg = validate_fs(&cfg).unwrap_err().to_string();
    assert!(msg.contains("Invalid exclude glob pattern"), "got: {msg}");
}

#[test]
fn test_validate_fs_empty_directory_is_ok() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "README.md", "# Not a rule\n");

    let report = validate_fs(&fs_config(tmp.path())).unwrap();
    assert_eq!(report.total_files, 0);
    assert!(report.ok);
    assert_eq!(report.exit_code(), 0);
    assert!(render_human(&report).contains("All files are valid!"));
}

#[test]
fn test_validate_fs_two_file_scenario() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.mdc", VALID_RULE);
    write(
        tmp.path(),
        "b.mdc",
        "---\ndescription: \"\"\nglobs: []\nalwaysApply: \"true\"\n---\n\n# B\n",
    );

    let report = validate_fs(&fs_config(tmp.path())).unwrap();
    assert_eq!(report.total_files, 2);
    assert_eq!(report.valid_files, 1);
    assert_eq!(report.invalid_files, 1);
    assert_eq!(report.exit_code(), 1);

    let invalid: Vec<_> = report.invalid_results().collect();
    assert_eq!(invalid.len(), 1);
    assert_eq!(invalid[0].path, PathBuf::from("b.mdc"));
    assert_eq!(
        invalid[0].violations,
        vec![Violation::InvalidDescription, Violation::InvalidAlwaysApply]
    );

    let output = render_human(&report);
    assert!(output.contains("Total files checked: 2"), "got: {output}");
    assert!(output.contains("Valid files: 1"));
    assert!(output.contains("Invalid files: 1"));
    assert!(output.contains("  b.mdc:\n    - description missing or empty\n    - alwaysApply missing or not boolean\n"));
    assert!(!output.contains("a.mdc"));
}

#[test]
fn test_validate_fs_one_result_per_file() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "ok/one.mdc", VALID_RULE);
    write(tmp.path(), "ok/two.mdc", VALID_RULE);
    write(tmp.path(), "bad/no_header.mdc", "# Just a heading\n");
    write(tmp.path(), "bad/no_close.mdc", "---\ndescription: x\n");
    fs::write(tmp.path().join("bad/binary.mdc"), [0xFF, 0xFE, 0x00]).unwrap();

    let report = validate_fs(&fs_config(tmp.path())).unwrap();
    assert_eq!(report.total_files, 5);
    assert_eq!(report.results.len(), report.total_files);
    assert_eq!(
        report.valid_files + report.invalid_files,
        report.total_files
    );
    assert_eq!(report.valid_files, 2);

    let paths: Vec<_> = report.results.iter().map(|r| r.path.clone()).collect();
    assert_eq!(
        paths,
        vec![
            PathBuf::from("bad/binary.mdc"),
            PathBuf::from("bad/no_close.mdc"),
            PathBuf::from("bad/no_header.mdc"),
            PathBuf::from("ok/one.mdc"),
            PathBuf::from("ok/two.mdc"),
        ]
    );
    assert_eq!(report.results[0].violations, vec![Violation::InvalidEncoding]);
    assert_eq!(
        report.results[1].violations,
        vec![Violation::MissingClosingDelimiter]
    );
    assert_eq!(
        report.results[2].violations,
        vec![Violation::MissingOpeningDelimiter]
    );
}

#[test]
fn test_validate_fs_missing_fields_reported_together() {
    let tmp = TempDir::new().unwrap();
    write(
        tmp.path(),
        "partial.mdc",
        "---\ndescription: Only a description\n---\n\n# Partial\n",
    );

    let report = validate_fs(&fs_config(tmp.path())).unwrap();
    assert_eq!(
        report.results[0].violations,
        vec![Violation::InvalidGlobs, Violation::InvalidAlwaysApply]
    );
}

#[test]
fn test_validate_fs_is_deterministic() {
    let tmp = TempDir::new().unwrap();
    for name in ["q.mdc", "c/d.mdc", "a.mdc", "m/n/o.mdc", "b.mdc"] {
        write(tmp.path(), name, VALID_RULE);
    }
    write(tmp.path(), "m/broken.mdc", "no frontmatter\n");

    let first = render_human(&validate_fs(&fs_config(tmp.path())).unwrap());
    let second = render_human(&validate_fs(&fs_config(tmp.path())).unwrap());
    assert_eq!(first, second);
    assert!(first.contains("m/broken.mdc"));
}

#[test]
fn test_validate_fs_max_file_size_is_per_file_violation() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "big.mdc", VALID_RULE);
    write(tmp.path(), "small.mdc", "x");

    let mut cfg = fs_config(tmp.path());
    cfg.max_file_size = 16;
    let report = validate_fs(&cfg).unwrap();

    assert_eq!(report.total_files, 2);
    assert_eq!(
        report.results[0].violations,
        vec![Violation::FileTooLarge { limit: 16 }]
    );
    assert_eq!(
        report.results[1].violations,
        vec![Violation::MissingOpeningDelimiter]
    );
}

#[test]
fn test_validate_fs_exclude_pattern() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "kept.mdc", VALID_RULE);
    write(tmp.path(), "drafts/wip.mdc", "not a rule yet\n");

    let report_all = validate_fs(&fs_config(tmp.path())).unwrap();
    assert_eq!(report_all.total_files, 2);
    assert!(!report_all.ok);

    let mut cfg = fs_config(tmp.path());
    cfg.exclude = vec!["wip.mdc".to_owned()];
    let report = validate_fs(&cfg).unwrap();
    assert_eq!(report.total_files, 1);
    assert!(report.ok);
}

#[test]
fn test_validate_fs_exclude_directory_pattern() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.mdc", VALID_RULE);
    write(tmp.path(), "drafts/wip.mdc", "not a rule yet\n");
    write(tmp.path(), "drafts/old/stale.mdc", "still not a rule\n");

    let mut cfg = fs_config(tmp.path());
    cfg.exclude = vec!["drafts/*".to_owned()];
    let report = validate_fs(&cfg).unwrap();
    assert_eq!(report.total_files, 1);
    assert_eq!(report.results[0].path, PathBuf::from("a.mdc"));
    assert!(report.ok);
}

#[test]
fn test_cli_exclude_directory_from_current_dir() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.mdc", VALID_RULE);
    write(tmp.path(), "drafts/wip.mdc", "not a rule yet\n");

    let output = Command::new(env!("CARGO_BIN_EXE_mdc-validator"))
        .args(["--exclude", "drafts/*"])
        .current_dir(tmp.path())
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(output.status.code(), Some(0), "got: {stdout}");
    assert!(stdout.contains("Total files checked: 1"), "got: {stdout}");
}

#[test]
fn test_validate_fs_single_file_root() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "solo.mdc", VALID_RULE);

    let report = validate_fs(&fs_config(&tmp.path().join("solo.mdc"))).unwrap();
    assert_eq!(report.total_files, 1);
    assert!(report.ok);
}

#[test]
fn test_validate_fs_json_output_contract() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.mdc", VALID_RULE);

    let report = validate_fs(&fs_config(tmp.path())).unwrap();
    let mut buf = Vec::new();
    mdc_validator::output::write_json(&report, &mut buf).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();

    assert_eq!(json["total_files"], 1);
    assert_eq!(json["valid_files"], 1);
    assert_eq!(json["invalid_files"], 0);
    assert!(json["ok"].as_bool().unwrap());
    assert_eq!(json["results"][0]["path"], "a.mdc");
    assert!(json["results"][0]["violations"].as_array().unwrap().is_empty());
}

#[test]
fn test_cli_exit_status() {
    let tmp = TempDir::new().unwrap();
    write(tmp.path(), "a.mdc", VALID_RULE);

    let ok = Command::new(env!("CARGO_BIN_EXE_mdc-validator"))
        .arg(tmp.path())
        .output()
        .unwrap();
    assert_eq!(ok.status.code(), Some(0));
    let stdout = String::from_utf8(ok.stdout).unwrap();
    assert!(stdout.starts_with("MDC File Validation Report\n"), "got: {stdout}");

    write(tmp.path(), "b.mdc", "---\nglobs: []\n---\n\n# B\n");
    let failed = Command::new(env!("CARGO_BIN_EXE_mdc-validator"))
        .arg(tmp.path())
        .output()
        .unwrap();
    assert_eq!(failed.status.code(), Some(1));
    let stdout = String::from_utf8(failed.stdout).unwrap();
    assert!(stdout.contains("Invalid files: 1"), "got: {stdout}");
    let listing = "  b.mdc:
    - description missing or empty
    - alwaysApply missing or not boolean

";
    assert!(stdout.ends_with(listing), "got: {stdout}");

    let missing = Command::new(env!("CARGO_BIN_EXE_mdc-validator"))
        .arg(tmp.path().join("nope"))
        .output()
        .unwrap();
    assert_eq!(missing.status.code(), Some(1));
    assert!(String::from_utf8(missing.stderr).unwrap().contains("Error:"));
}
