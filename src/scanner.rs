//! Non-recursive directory scanning.
//!
//! Lists the regular files directly inside a directory, in a stable order, and
//! groups them by category for type-based organization.

use crate::file_category::{Category, classify};
use crate::file_organizer::{OrganizeError, OrganizeResult};
use chrono::{DateTime, Local};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// A regular file found by a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Full path to the file.
    pub path: PathBuf,
    /// The file name, lossily converted to UTF-8.
    pub name: String,
    /// Last modification time in the local time zone.
    pub modified: DateTime<Local>,
}

/// Files grouped by category. Categories without files are never present.
pub type ScanResult = BTreeMap<Category, Vec<FileEntry>>;

/// Lists the regular files directly inside `dir`, sorted by name.
///
/// Subdirectories, symlinks and other special entries are left out. Hidden
/// files and files without an extension are included. Entries whose metadata
/// cannot be read are logged and skipped.
pub fn scan_files(dir: &Path) -> OrganizeResult<Vec<FileEntry>> {
    let entries = fs::read_dir(dir).map_err(|e| OrganizeError::ReadDirectory {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "skipping unreadable entry");
                continue;
            }
        };

        match entry.file_type() {
            Ok(file_type) if file_type.is_file() => {}
            _ => continue,
        }

        let path = entry.path();
        let modified = match entry.metadata().and_then(|m| m.modified()) {
            Ok(time) => DateTime::<Local>::from(time),
            Err(e) => {
                warn!(file = %path.display(), error = %e, "cannot read modification time, skipping");
                continue;
            }
        };

        files.push(FileEntry {
            name: entry.file_name().to_string_lossy().to_string(),
            path,
            modified,
        });
    }

    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}

/// Groups the files of `dir` by their extension category.
pub fn scan_by_category(dir: &Path) -> OrganizeResult<ScanResult> {
    let mut groups = ScanResult::new();
    for entry in scan_files(dir)? {
        groups.entry(classify(&entry.name)).or_default().push(entry);
    }
    Ok(groups)
}
