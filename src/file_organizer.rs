/// File organization system for moving files into destination directories.
///
/// This module provides the organizer that validates a root directory, scans
/// its files, and moves each one into a subdirectory chosen either by file
/// category (`images/`) or by modification month (`2024/03/`). Both modes go
/// through one shared resolve-and-move routine, and both return the same
/// `OrganizePlan` whether or not the run was a dry run.
use crate::file_category::classify;
use crate::scanner::{self, FileEntry, ScanResult};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during file organization operations.
#[derive(Debug, Error)]
pub enum OrganizeError {
    /// The root path does not exist.
    #[error("Path '{}' does not exist", .path.display())]
    DirectoryNotFound { path: PathBuf },
    /// The root path exists but is not a directory.
    #[error("Path '{}' is not a directory", .path.display())]
    NotADirectory { path: PathBuf },
    /// Listing the root directory failed.
    #[error("Failed to read directory {}: {source}", .path.display())]
    ReadDirectory {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to create a destination directory.
    #[error("Failed to create directory {}: {source}", .path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to move a file to its destination.
    #[error("Failed to move {} to {}: {source}", .source_path.display(), .destination.display())]
    FileMoveFailure {
        source_path: PathBuf,
        destination: PathBuf,
        source: std::io::Error,
    },
    /// Failed to render a plan as JSON.
    #[error("Failed to serialize plan: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for file organization operations.
pub type OrganizeResult<T> = Result<T, OrganizeError>;

/// What happened to a single file.
#[derive(Debug)]
pub enum MoveOutcome {
    /// The file was renamed into its destination directory.
    Moved,
    /// Dry run: the file would have been moved.
    WouldMove,
    /// A same-named entry already occupies the destination.
    Skipped,
    /// Creating the destination or moving the file failed.
    Failed(OrganizeError),
}

/// A file that could not be moved.
#[derive(Debug, Clone, Serialize)]
pub struct MoveFailure {
    /// Name of the file that stayed in place.
    pub file: String,
    /// Human-readable reason.
    pub error: String,
}

/// Destination label (`"images/"`, `"2024/03/"`) to the file names moved
/// there, plus any per-file failures.
///
/// Labels whose every candidate was skipped are not present.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrganizePlan {
    plan: BTreeMap<String, Vec<String>>,
    failures: Vec<MoveFailure>,
}

impl OrganizePlan {
    fn record(&mut self, label: String, file: String) {
        self.plan.entry(label).or_default().push(file);
    }

    /// File names recorded under `label`.
    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.plan.get(label).map(Vec::as_slice)
    }

    /// Destination labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.plan.keys().map(String::as_str)
    }

    /// Iterates `(label, files)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.plan.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// The underlying label to file-names map.
    pub fn as_map(&self) -> &BTreeMap<String, Vec<String>> {
        &self.plan
    }

    /// Total number of files moved or to be moved.
    pub fn total_files(&self) -> usize {
        self.plan.values().map(Vec::len).sum()
    }

    /// Number of destination directories in the plan.
    pub fn destination_count(&self) -> usize {
        self.plan.len()
    }

    /// True when nothing was (or would be) moved.
    pub fn is_empty(&self) -> bool {
        self.total_files() == 0
    }

    /// Files that failed to move during this run.
    pub fn failures(&self) -> &[MoveFailure] {
        &self.failures
    }

    /// Renders the plan and failures as pretty JSON.
    pub fn to_json(&self) -> OrganizeResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Moves one file into `destination_dir` unless something is already there.
///
/// Under `dry_run` nothing on disk changes, not even directory creation, but
/// the conflict check still runs against the existing filesystem.
pub fn resolve_and_move(file_path: &Path, destination_dir: &Path, dry_run: bool) -> MoveOutcome {
    if !dry_run && let Err(e) = fs::create_dir_all(destination_dir) {
        return MoveOutcome::Failed(OrganizeError::DirectoryCreationFailed {
            path: destination_dir.to_path_buf(),
            source: e,
        });
    }

    let Some(file_name) = file_path.file_name() else {
        return MoveOutcome::Failed(OrganizeError::FileMoveFailure {
            source_path: file_path.to_path_buf(),
            destination: destination_dir.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "file has no name component",
            ),
        });
    };
    let destination = destination_dir.join(file_name);

    // Any entry counts as a conflict, including a dangling symlink.
    if fs::symlink_metadata(&destination).is_ok() {
        debug!(file = %file_path.display(), destination = %destination.display(), "destination occupied, skipping");
        return MoveOutcome::Skipped;
    }

    if dry_run {
        return MoveOutcome::WouldMove;
    }

    match fs::rename(file_path, &destination) {
        Ok(()) => {
            debug!(file = %file_path.display(), destination = %destination.display(), "moved");
            MoveOutcome::Moved
        }
        Err(e) => MoveOutcome::Failed(OrganizeError::FileMoveFailure {
            source_path: file_path.to_path_buf(),
            destination,
            source: e,
        }),
    }
}

/// Organizes the files directly inside one root directory.
///
/// The root is validated once, at construction.
#[derive(Debug, Clone)]
pub struct FileOrganizer {
    root: PathBuf,
}

impl FileOrganizer {
    /// Creates an organizer for `root`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use dirsort::file_organizer::FileOrganizer;
    ///
    /// let organizer = FileOrganizer::new("/path/to/downloads")?;
    /// let plan = organizer.organize_by_type(true)?;
    /// for (label, files) in plan.iter() {
    ///     println!("{label}: {}", files.join(", "));
    /// }
    /// # Ok::<(), dirsort::file_organizer::OrganizeError>(())
    /// ```
    pub fn new(root: impl Into<PathBuf>) -> OrganizeResult<Self> {
        let root = root.into();
        if !root.exists() {
            return Err(OrganizeError::DirectoryNotFound { path: root });
        }
        if !root.is_dir() {
            return Err(OrganizeError::NotADirectory { path: root });
        }
        Ok(Self { root })
    }

    /// The directory being organized.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Groups the root's files by category.
    pub fn scan(&self) -> OrganizeResult<ScanResult> {
        scanner::scan_by_category(&self.root)
    }

    /// Moves each file into `<root>/<category>/`.
    pub fn organize_by_type(&self, dry_run: bool) -> OrganizeResult<OrganizePlan> {
        let entries: Vec<FileEntry> = self.scan()?.into_values().flatten().collect();
        Ok(self.organize_with(entries, dry_run, |entry| {
            format!("{}/", classify(&entry.name).dir_name())
        }))
    }

    /// Moves each file into `<root>/<YYYY>/<MM>/` by local modification time.
    pub fn organize_by_date(&self, dry_run: bool) -> OrganizeResult<OrganizePlan> {
        let entries = scanner::scan_files(&self.root)?;
        Ok(self.organize_with(entries, dry_run, |entry| {
            entry.modified.format("%Y/%m/").to_string()
        }))
    }

    /// Dry run of type-based organization.
    pub fn preview_organization(&self) -> OrganizeResult<OrganizePlan> {
        self.organize_by_type(true)
    }

    fn organize_with<F>(&self, entries: Vec<FileEntry>, dry_run: bool, destination: F) -> OrganizePlan
    where
        F: Fn(&FileEntry) -> String,
    {
        info!(root = %self.root.display(), files = entries.len(), dry_run, "organizing");

        let mut plan = OrganizePlan::default();
        for entry in entries {
            let label = destination(&entry);
            let destination_dir = self.destination_dir(&label);

            match resolve_and_move(&entry.path, &destination_dir, dry_run) {
                MoveOutcome::Moved | MoveOutcome::WouldMove => plan.record(label, entry.name),
                MoveOutcome::Skipped => {}
                MoveOutcome::Failed(e) => {
                    warn!(file = %entry.path.display(), error = %e, "could not organize file");
                    plan.failures.push(MoveFailure {
                        file: entry.name,
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(
            moved = plan.total_files(),
            destinations = plan.destination_count(),
            failed = plan.failures.len(),
            "done"
        );
        plan
    }

    fn destination_dir(&self, label: &str) -> PathBuf {
        label
            .split('/')
            .filter(|part| !part.is_empty())
            .fold(self.root.clone(), |dir, part| dir.join(part))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_new_rejects_missing_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let missing = temp_dir.path().join("nope");
        assert!(matches!(
            FileOrganizer::new(&missing),
            Err(OrganizeError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn test_new_rejects_file_path() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let file = temp_dir.path().join("file.txt");
        fs::write(&file, "x").unwrap();
        let err = FileOrganizer::new(&file).unwrap_err();
        assert!(matches!(err, OrganizeError::NotADirectory { .. }));
        assert!(err.to_string().contains("is not a directory"));
    }

    #[test]
    fn test_resolve_and_move_creates_directory() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let file_path = base_path.join("test.txt");
        fs::write(&file_path, "test content").expect("Failed to write test file");

        let destination_dir = base_path.join("documents");
        let outcome = resolve_and_move(&file_path, &destination_dir, false);

        assert!(matches!(outcome, MoveOutcome::Moved));
        assert!(destination_dir.is_dir());
        assert!(!file_path.exists());
        assert_eq!(
            fs::read_to_string(destination_dir.join("test.txt")).unwrap(),
            "test content"
        );
    }

    #[test]
    fn test_resolve_and_move_creates_nested_directories() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let file_path = base_path.join("a.jpg");
        fs::write(&file_path, "x").unwrap();

        let destination_dir = base_path.join("2024").join("03");
        let outcome = resolve_and_move(&file_path, &destination_dir, false);

        assert!(matches!(outcome, MoveOutcome::Moved));
        assert!(destination_dir.join("a.jpg").exists());
    }

    #[test]
    fn test_resolve_and_move_dry_run_touches_nothing() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let file_path = base_path.join("song.mp3");
        fs::write(&file_path, "x").unwrap();

        let destination_dir = base_path.join("audio");
        let outcome = resolve_and_move(&file_path, &destination_dir, true);

        assert!(matches!(outcome, MoveOutcome::WouldMove));
        assert!(file_path.exists());
        assert!(!destination_dir.exists());
    }

    #[test]
    fn test_resolve_and_move_skips_existing_destination() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        let destination_dir = base_path.join("images");
        fs::create_dir(&destination_dir).unwrap();
        fs::write(destination_dir.join("x.jpg"), "old").unwrap();
        let file_path = base_path.join("x.jpg");
        fs::write(&file_path, "new").unwrap();

        assert!(matches!(
            resolve_and_move(&file_path, &destination_dir, true),
            MoveOutcome::Skipped
        ));
        assert!(matches!(
            resolve_and_move(&file_path, &destination_dir, false),
            MoveOutcome::Skipped
        ));
        assert_eq!(fs::read_to_string(&file_path).unwrap(), "new");
        assert_eq!(
            fs::read_to_string(destination_dir.join("x.jpg")).unwrap(),
            "old"
        );
    }

    #[test]
    fn test_resolve_and_move_reports_directory_failure() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        // A regular file where the destination directory should go.
        fs::write(base_path.join("other"), "blocker").unwrap();
        let file_path = base_path.join("data.xyz");
        fs::write(&file_path, "x").unwrap();

        let outcome = resolve_and_move(&file_path, &base_path.join("other"), false);

        assert!(matches!(
            outcome,
            MoveOutcome::Failed(OrganizeError::DirectoryCreationFailed { .. })
        ));
        assert!(file_path.exists());
    }

    #[test]
    fn test_organize_collects_failures_and_continues() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let base_path = temp_dir.path();
        // "other" has no extension, so its own destination is <root>/other/,
        // which cannot be created over the file itself.
        fs::write(base_path.join("other"), "blocker").unwrap();
        fs::write(base_path.join("photo.jpg"), "x").unwrap();

        let organizer = FileOrganizer::new(base_path).unwrap();
        let plan = organizer.organize_by_type(false).unwrap();

        assert_eq!(plan.get("images/"), Some(&["photo.jpg".to_string()][..]));
        assert_eq!(plan.get("other/"), None);
        assert_eq!(plan.failures().len(), 1);
        assert_eq!(plan.failures()[0].file, "other");
        assert!(base_path.join("images").join("photo.jpg").exists());
        assert!(base_path.join("other").is_file());
    }

    #[test]
    fn test_plan_accessors() {
        let mut plan = OrganizePlan::default();
        assert!(plan.is_empty());
        plan.record("images/".to_string(), "a.jpg".to_string());
        plan.record("images/".to_string(), "b.png".to_string());
        plan.record("code/".to_string(), "main.c".to_string());

        assert!(!plan.is_empty());
        assert_eq!(plan.total_files(), 3);
        assert_eq!(plan.destination_count(), 2);
        assert_eq!(plan.labels().collect::<Vec<_>>(), vec!["code/", "images/"]);
        assert_eq!(plan.get("images/").map(<[String]>::len), Some(2));
    }

    #[test]
    fn test_plan_to_json() {
        let mut plan = OrganizePlan::default();
        plan.record("2024/03/".to_string(), "a.jpg".to_string());
        plan.failures.push(MoveFailure {
            file: "b.txt".to_string(),
            error: "denied".to_string(),
        });

        let value: serde_json::Value = serde_json::from_str(&plan.to_json().unwrap()).unwrap();
        assert_eq!(value["plan"]["2024/03/"][0], "a.jpg");
        assert_eq!(value["failures"][0]["file"], "b.txt");
    }
}
