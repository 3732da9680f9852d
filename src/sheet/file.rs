//! Cheat sheet file loading
//!
//! Reads INI files with a `[main]` section carrying the display name and a
//! `[cheats]` section carrying the entries.

use crate::error::SheetError;
use crate::sheet::CheatSheet;

use ini::{Ini, ParseOption};
use std::path::{Path, PathBuf};

/// File extension of cheat sheet files
pub const SHEET_EXTENSION: &str = "ini";

/// Section holding the entries
pub const CHEATS_SECTION: &str = "cheats";

/// Section holding sheet metadata
pub const MAIN_SECTION: &str = "main";

/// Path of the sheet named `name` inside `dir`
pub fn sheet_path<P: AsRef<Path>>(dir: P, name: &str) -> PathBuf {
    dir.as_ref().join(format!("{}.{}", name, SHEET_EXTENSION))
}

/// A parsed cheat sheet file
#[derive(Debug)]
pub struct CheatFile {
    path: PathBuf,
    ini: Ini,
}

impl CheatFile {
    /// Load and parse a sheet file
    ///
    /// # Errors
    /// Returns `SheetError::FileNotFound` if the file cannot be read and
    /// `SheetError::Parse` if it is not valid INI syntax
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SheetError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            log::debug!("Cannot read {}: {}", path.display(), e);
            SheetError::FileNotFound(path.to_path_buf())
        })?;

        Self::parse(path, &content)
    }

    /// Parse sheet contents that were read from `path`
    pub fn parse<P: AsRef<Path>>(path: P, content: &str) -> Result<Self, SheetError> {
        let path = path.as_ref().to_path_buf();

        // Values are shown verbatim, so backslashes and quotes stay literal.
        // Indented lines continue the previous value.
        let options = ParseOption {
            enabled_quote: false,
            enabled_escape: false,
            enabled_indented_mutiline_value: true,
            ..ParseOption::default()
        };

        let ini = Ini::load_from_str_opt(content, options).map_err(|e| SheetError::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;

        Ok(Self { path, ini })
    }

    /// Path the sheet was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Display name from `[main] name`
    pub fn name(&self) -> Option<&str> {
        self.ini.get_from(Some(MAIN_SECTION), "name")
    }

    /// Entries of the `[cheats]` section
    ///
    /// # Errors
    /// Returns `SheetError::MissingSection` if the file has no `[cheats]` section
    /// and `SheetError::Parse` if a description appears twice
    pub fn cheats(&self) -> Result<CheatSheet, SheetError> {
        let section = self
            .ini
            .section(Some(CHEATS_SECTION))
            .ok_or_else(|| SheetError::MissingSection {
                path: self.path.clone(),
                section: CHEATS_SECTION.to_string(),
            })?;

        CheatSheet::from_pairs(section.iter()).map_err(|e| SheetError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}
