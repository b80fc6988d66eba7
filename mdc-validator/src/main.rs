// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use mdc_validator::{DEFAULT_RULE_EXTENSION, FsSourceConfig, output, validate_fs};

/// Validate the frontmatter and layout of Cursor rule files.
///
/// Exits with status 0 when every rule file is valid and 1 otherwise.
#[derive(Parser, Debug)]
#[command(name = "mdc-validator", version, about, long_about = None)]
struct Cli {
    /// Directory to scan (or a single rule file).
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    format: OutputFormat,

    /// Rule file extension, without the dot.
    #[arg(long, default_value = DEFAULT_RULE_EXTENSION)]
    extension: String,

    /// Glob pattern of files to skip. May be repeated.
    #[arg(long)]
    exclude: Vec<String>,

    /// Follow symbolic links while walking.
    #[arg(long)]
    follow_links: bool,

    /// Maximum size of a single rule file, in bytes.
    #[arg(long)]
    max_file_size: Option<u64>,

    /// Enable verbose logging on stderr. Repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Human,
    Json,
}

impl Cli {
    fn source_config(&self) -> FsSourceConfig {
        let mut config = FsSourceConfig::default();
        config.root.clone_from(&self.root);
        config.extension.clone_from(&self.extension);
        config.exclude.clone_from(&self.exclude);
        config.follow_links = self.follow_links;
        if let Some(max) = self.max_file_size {
            config.max_file_size = max;
        }
        config
    }
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

fn run(cli: &Cli) -> anyhow::Result<u8> {
    let report = validate_fs(&cli.source_config())?;

    let mut stdout = std::io::stdout().lock();
    match cli.format {
        OutputFormat::Human => output::write_human(&report, &mut stdout)?,
        OutputFormat::Json => output::write_json(&report, &mut stdout)?,
    }
    stdout.flush()?;

    Ok(report.exit_code())
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
