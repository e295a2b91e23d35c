//! Directory scanning (read-only, deterministic order).

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GenerateError, Result};

/// One immediate child of a scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    /// Full path of the child
    pub path: PathBuf,
    /// File name as it appears on disk
    pub name: String,
    /// Whether the child is (or links to) a directory
    pub is_dir: bool,
}

/// List the immediate children of `dir`.
///
/// Directories come first, then files; each group is sorted by
/// case-insensitive name. Names that differ only in case fall back to an
/// exact comparison so the order is total and stable across runs.
///
/// ```text
/// assets/
/// ├── Images/        -> 1
/// ├── fonts/         -> 0   (dirs first, "fonts" < "images")
/// ├── b.png          -> 3
/// └── A.png          -> 2
/// ```
pub fn scan_dir(dir: &Path) -> Result<Vec<ScanEntry>> {
    if !dir.is_dir() {
        return Err(GenerateError::InvalidInput(dir.to_path_buf()));
    }

    let read = fs::read_dir(dir).map_err(|err| GenerateError::Io(dir.to_path_buf(), err))?;

    let mut entries = Vec::new();
    for entry in read {
        let entry = entry.map_err(|err| GenerateError::Io(dir.to_path_buf(), err))?;
        let path = entry.path();
        // `Path::is_dir` follows symlinks, unlike `DirEntry::file_type`
        let is_dir = path.is_dir();
        let name = entry.file_name().to_string_lossy().into_owned();
        entries.push(ScanEntry { path, name, is_dir });
    }

    entries.sort_by(compare_entries);
    Ok(entries)
}

fn compare_entries(a: &ScanEntry, b: &ScanEntry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| compare_names(&a.name, &b.name))
}

/// Case-insensitive name ordering with an exact tie-break.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    folded.then_with(|| a.cmp(b))
}
