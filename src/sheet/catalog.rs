//! Sheet discovery
//!
//! Walks a sheet directory and collects the display name of every sheet found.

use crate::error::SheetError;
use crate::sheet::file::{CheatFile, SHEET_EXTENSION};

use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};

/// A sheet found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    /// Display name from `[main] name`
    pub name: String,
    /// File the name was read from
    pub path: PathBuf,
}

/// List every sheet below `dir`, recursively
///
/// Files are visited in directory order, which is platform dependent. Files
/// that fail to parse or have no `[main] name` are skipped, as are unreadable
/// subdirectories. Symlinked directories are not followed.
///
/// # Errors
/// Returns `SheetError::DirectoryNotFound` if `dir` is not a readable directory
pub fn list_sheets<P: AsRef<Path>>(dir: P) -> Result<Vec<SheetSummary>, SheetError> {
    let dir = dir.as_ref();

    if !dir.is_dir() {
        return Err(SheetError::DirectoryNotFound(dir.to_path_buf()));
    }

    let entries =
        fs::read_dir(dir).map_err(|_| SheetError::DirectoryNotFound(dir.to_path_buf()))?;

    let mut sheets = Vec::new();
    walk(entries, &mut sheets);
    Ok(sheets)
}

fn walk(entries: ReadDir, sheets: &mut Vec<SheetSummary>) {
    for entry in entries.flatten() {
        let path = entry.path();

        // DirEntry::file_type does not follow symlinks
        let file_type = match entry.file_type() {
            Ok(file_type) => file_type,
            Err(e) => {
                log::warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        if file_type.is_dir() {
            match fs::read_dir(&path) {
                Ok(children) => walk(children, sheets),
                Err(e) => log::warn!("Skipping {}: {}", path.display(), e),
            }
            continue;
        }

        if file_type.is_symlink() && path.is_dir() {
            log::debug!("Not following symlinked directory {}", path.display());
            continue;
        }

        if !is_sheet_file(&path) {
            continue;
        }

        match CheatFile::load(&path) {
            Ok(file) => match file.name() {
                Some(name) => sheets.push(SheetSummary {
                    name: name.to_string(),
                    path,
                }),
                None => log::warn!("Skipping {}: no [main] name", path.display()),
            },
            Err(e) => log::warn!("Skipping {}", e),
        }
    }
}

fn is_sheet_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.ends_with(SHEET_EXTENSION))
        .unwrap_or(false)
}
