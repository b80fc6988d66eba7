// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use mdc_batch::{UpdateOutcome, find_projects, find_update_script, run_update};

const DEFAULT_PROJECTS_DIR: &str = "/projects";

/// Update the cursor rules submodule across multiple projects.
///
/// Scans `PROJECTS_DIR` for git projects that have `.cursor/rules` as a git
/// submodule and runs the cursor-rules script in each of them.
#[derive(Parser, Debug)]
#[command(name = "batch-update-cursor-rules", version, about, long_about = None)]
struct Cli {
    /// Directory containing the projects to scan.
    #[arg(default_value = DEFAULT_PROJECTS_DIR)]
    projects_dir: PathBuf,

    /// Show what would be done without running cursor-rules.
    #[arg(long)]
    dry_run: bool,

    /// Path to the cursor-rules script. Searched for when omitted.
    #[arg(long)]
    cursor_rules_path: Option<PathBuf>,

    /// Enable verbose logging on stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn project_name(project: &Path) -> String {
    project.file_name().map_or_else(
        || project.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

fn resolve_script(explicit: Option<&Path>) -> anyhow::Result<PathBuf> {
    match explicit {
        Some(path) if path.is_file() => Ok(path.to_path_buf()),
        Some(path) => bail!("cursor-rules script does not exist: {}", path.display()),
        None => find_update_script().context(
            "cursor-rules script not found. Please install it or specify --cursor-rules-path",
        ),
    }
}

fn print_outcome(outcome: &UpdateOutcome, project: &Path, script: &Path) {
    let name = project_name(project);
    match outcome {
        UpdateOutcome::DryRun => {
            println!(
                "  [DRY RUN] Would run: {} {}",
                script.display(),
                project.display()
            );
        }
        UpdateOutcome::Updated { stdout } => {
            println!("  {} Successfully updated {name}", "\u{2713}".green());
            let stdout = stdout.trim();
            if !stdout.is_empty() {
                println!("    {stdout}");
            }
        }
        UpdateOutcome::Failed { stderr, .. } => {
            eprintln!("  {} Failed to update {name}", "\u{2717}".red());
            let stderr = stderr.trim();
            if !stderr.is_empty() {
                eprintln!("    Error: {stderr}");
            }
        }
        UpdateOutcome::SpawnFailed { error } => {
            eprintln!("  {} Error running cursor-rules: {error}", "\u{2717}".red());
        }
        // `UpdateOutcome` is `#[non_exhaustive]`; every current variant is handled above.
        _ => {}
    }
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    if !cli.projects_dir.is_dir() {
        bail!("Projects directory does not exist: {}", cli.projects_dir.display());
    }

    println!(
        "Scanning {} for projects with cursor rules submodule...",
        cli.projects_dir.display()
    );
    println!();

    let script = resolve_script(cli.cursor_rules_path.as_deref())?;
    println!("Using cursor-rules script: {}", script.display());
    println!();

    let projects = find_projects(&cli.projects_dir)?;
    if projects.is_empty() {
        println!("No projects with cursor rules submodule found.");
        return Ok(0);
    }

    println!(
        "Found {} project(s) with cursor rules submodule:",
        projects.len()
    );
    for project in &projects {
        println!("  - {}", project_name(project));
    }
    println!();

    if cli.dry_run {
        println!("DRY RUN MODE - No changes will be made");
        println!();
    }

    let mut success_count = 0;
    for project in &projects {
        println!("Updating {}...", project_name(project));
        let outcome = run_update(project, &script, cli.dry_run);
        print_outcome(&outcome, project, &script);
        if outcome.is_success() {
            success_count += 1;
        } else {
            tracing::warn!(project = %project.display(), "update failed: {outcome:?}");
        }
        println!();
    }

    println!("{}", "=".repeat(60));
    println!(
        "Summary: {success_count}/{} projects updated successfully",
        projects.len()
    );

    Ok(u8::from(success_count < projects.len()))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}
