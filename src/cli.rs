//! Command-line interface module for dirsort.
//!
//! This module handles argument parsing, logging setup, and running the
//! organizer in the requested mode.

use crate::file_organizer::{FileOrganizer, OrganizePlan, OrganizeResult};
use crate::output::OutputFormatter;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// How files are grouped into subdirectories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrganizeMode {
    /// By file extension category, e.g. `images/`.
    Type,
    /// By modification month, e.g. `2024/03/`.
    Date,
}

impl OrganizeMode {
    fn description(&self) -> &'static str {
        match self {
            OrganizeMode::Type => "by type",
            OrganizeMode::Date => "by date (YYYY/MM)",
        }
    }
}

/// Organize the files of a directory into subdirectories.
#[derive(Parser, Debug)]
#[command(
    name = "dirsort",
    version,
    about = "Organize files in a directory by type or modification date",
    after_help = "Examples:\n  \
                  dirsort --path ~/Downloads --dry-run\n  \
                  dirsort --path ~/Downloads --mode type\n  \
                  dirsort --path ~/Pictures --mode date --dry-run"
)]
pub struct Args {
    /// Directory containing the files to organize.
    #[arg(long)]
    pub path: PathBuf,

    /// Organization mode.
    #[arg(long, value_enum, default_value_t = OrganizeMode::Type)]
    pub mode: OrganizeMode,

    /// Preview what would be moved without touching the filesystem.
    #[arg(long)]
    pub dry_run: bool,

    /// Print the resulting plan as JSON instead of human-readable lines.
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging on stderr (overridden by RUST_LOG).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Installs the stderr log subscriber. `RUST_LOG` takes precedence.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Runs one organization pass as described by `args` and prints the result.
///
/// Per-file failures are printed but do not make this return an error; only
/// an invalid root or an unreadable directory does.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use dirsort::cli::{Args, run_cli};
///
/// let args = Args::parse_from(["dirsort", "--path", "/path/to/directory", "--dry-run"]);
/// if let Err(e) = run_cli(&args) {
///     eprintln!("Error: {}", e);
/// }
/// ```
pub fn run_cli(args: &Args) -> OrganizeResult<OrganizePlan> {
    let organizer = FileOrganizer::new(&args.path)?;
    let description = args.mode.description();

    if !args.json {
        if args.dry_run {
            OutputFormatter::info(&format!(
                "Dry run mode: Previewing organization of files in '{}' {}",
                organizer.root().display(),
                description
            ));
        } else {
            OutputFormatter::info(&format!(
                "Organizing files in '{}' {}...",
                organizer.root().display(),
                description
            ));
        }
        OutputFormatter::plain(&"-".repeat(50));
    }

    let plan = match args.mode {
        OrganizeMode::Type => organizer.organize_by_type(args.dry_run)?,
        OrganizeMode::Date => organizer.organize_by_date(args.dry_run)?,
    };

    if args.json {
        OutputFormatter::plain(&plan.to_json()?);
    } else {
        OutputFormatter::plan_lines(&plan, args.dry_run);
        OutputFormatter::summary(&plan, args.dry_run);
    }

    Ok(plan)
}
