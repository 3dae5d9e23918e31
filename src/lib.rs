//! dirsort - sort the files of a directory into subdirectories
//!
//! This library classifies files by extension, scans a single directory
//! non-recursively, and moves its files into per-category or per-month
//! subdirectories, with a dry-run mode that reports the same plan without
//! touching the filesystem.

pub mod cli;
pub mod file_category;
pub mod file_organizer;
pub mod output;
pub mod scanner;

pub use file_category::{CATEGORY_TABLE, Category, classify};
pub use file_organizer::{
    FileOrganizer, MoveFailure, MoveOutcome, OrganizeError, OrganizePlan, OrganizeResult,
    resolve_and_move,
};
pub use scanner::{FileEntry, ScanResult};

pub use cli::{Args, OrganizeMode, run_cli};
