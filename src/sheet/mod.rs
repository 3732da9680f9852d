//! Cheat sheet domain types
//!
//! A cheat sheet is the ordered `[cheats]` section of an INI file. Entries keep
//! the order they were written in; that order is the display order.

pub mod catalog;
pub mod file;

pub use catalog::{list_sheets, SheetSummary};
pub use file::{sheet_path, CheatFile};

use crate::error::DomainError;
use serde::Serialize;

/// A single description/value pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheatEntry {
    /// What the cheat does
    pub description: String,
    /// The command, shortcut or snippet itself
    pub value: String,
}

impl CheatEntry {
    /// Create a new entry
    pub fn new(description: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            value: value.into(),
        }
    }
}

/// An ordered, read-only collection of cheat entries
///
/// Descriptions are unique within a sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheatSheet {
    entries: Vec<CheatEntry>,
}

impl CheatSheet {
    /// Build a sheet from description/value pairs in order
    ///
    /// # Errors
    /// Returns `DomainError::DuplicateDescription` if a description repeats
    pub fn from_pairs<I, D, V>(pairs: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = (D, V)>,
        D: Into<String>,
        V: Into<String>,
    {
        let mut entries: Vec<CheatEntry> = Vec::new();

        for (description, value) in pairs {
            let entry = CheatEntry::new(description, value);
            if entries.iter().any(|e| e.description == entry.description) {
                return Err(DomainError::DuplicateDescription(entry.description));
            }
            entries.push(entry);
        }

        Ok(Self { entries })
    }

    /// Entries in display order
    pub fn entries(&self) -> &[CheatEntry] {
        &self.entries
    }

    /// Iterate over entries in display order
    pub fn iter(&self) -> std::slice::Iter<'_, CheatEntry> {
        self.entries.iter()
    }

    /// Number of entries
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the sheet has no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Length in characters of the longest description, 0 for an empty sheet
    pub fn description_width(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.description.chars().count())
            .max()
            .unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a CheatSheet {
    type Item = &'a CheatEntry;
    type IntoIter = std::slice::Iter<'a, CheatEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
