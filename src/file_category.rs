/// File categorization by extension.
///
/// This module maps a file name to one of a fixed set of categories using a
/// read-only extension table. Lookups are case-insensitive and never fail:
/// anything not in the table is `Category::Other`.
///
/// # Examples
///
/// ```
/// use dirsort::file_category::{Category, classify};
///
/// assert_eq!(classify("holiday.JPG"), Category::Images);
/// assert_eq!(classify("report.pdf"), Category::Documents);
/// assert_eq!(classify("Makefile"), Category::Other);
/// ```
use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

/// Represents a broad file category.
///
/// Each category owns one subdirectory of the organized root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Image files (JPG, PNG, GIF, etc.)
    Images,
    /// Document files (PDF, DOCX, TXT, etc.)
    Documents,
    /// Video files (MP4, MKV, AVI, etc.)
    Videos,
    /// Audio files (MP3, WAV, FLAC, etc.)
    Audio,
    /// Archive files (ZIP, RAR, 7Z, etc.)
    Archives,
    /// Source code and web files
    Code,
    /// Spreadsheet files (XLSX, CSV, ODS, etc.)
    Spreadsheets,
    /// Presentation files (PPTX, ODP, etc.)
    Presentations,
    /// No table entry matched
    Other,
}

/// The reference extension table. Extension sets are disjoint.
pub const CATEGORY_TABLE: &[(Category, &[&str])] = &[
    (
        Category::Images,
        &[".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".webp", ".svg"],
    ),
    (
        Category::Documents,
        &[".pdf", ".doc", ".docx", ".txt", ".rtf", ".odt"],
    ),
    (
        Category::Videos,
        &[".mp4", ".avi", ".mkv", ".mov", ".wmv", ".flv", ".webm"],
    ),
    (
        Category::Audio,
        &[".mp3", ".wav", ".flac", ".aac", ".ogg", ".m4a"],
    ),
    (
        Category::Archives,
        &[".zip", ".rar", ".7z", ".tar", ".gz", ".bz2"],
    ),
    (
        Category::Code,
        &[".py", ".js", ".html", ".css", ".java", ".cpp", ".c", ".h"],
    ),
    (Category::Spreadsheets, &[".xls", ".xlsx", ".csv", ".ods"]),
    (Category::Presentations, &[".ppt", ".pptx", ".odp"]),
];

static EXTENSION_INDEX: LazyLock<HashMap<&'static str, Category>> = LazyLock::new(|| {
    CATEGORY_TABLE
        .iter()
        .flat_map(|(category, extensions)| extensions.iter().map(move |ext| (*ext, *category)))
        .collect()
});

impl Category {
    /// Returns the directory name for this category.
    ///
    /// # Examples
    ///
    /// ```
    /// use dirsort::file_category::Category;
    ///
    /// assert_eq!(Category::Images.dir_name(), "images");
    /// assert_eq!(Category::Audio.dir_name(), "audio");
    /// assert_eq!(Category::Other.dir_name(), "other");
    /// ```
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::Images => "images",
            Category::Documents => "documents",
            Category::Videos => "videos",
            Category::Audio => "audio",
            Category::Archives => "archives",
            Category::Code => "code",
            Category::Spreadsheets => "spreadsheets",
            Category::Presentations => "presentations",
            Category::Other => "other",
        }
    }

    /// The extensions (lowercase, dot-prefixed) owned by this category.
    /// Empty for `Other`.
    pub fn extensions(&self) -> &'static [&'static str] {
        CATEGORY_TABLE
            .iter()
            .find(|(category, _)| category == self)
            .map(|(_, extensions)| *extensions)
            .unwrap_or(&[])
    }
}

/// Classifies a file name by its extension.
///
/// Only the last extension counts (`archive.tar.gz` is `.gz`). A leading dot
/// does not start an extension, so `.bashrc` is `Other`.
pub fn classify(file_name: &str) -> Category {
    let Some(ext) = Path::new(file_name).extension() else {
        return Category::Other;
    };
    let key = format!(".{}", ext.to_string_lossy().to_lowercase());
    EXTENSION_INDEX
        .get(key.as_str())
        .copied()
        .unwrap_or(Category::Other)
}
