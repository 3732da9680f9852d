//! Cheat sheet renderers
//!
//! Every renderer writes one unit per entry, in sheet order. The iteration is
//! shared in [`write_entries`]; each variant only decides how a single entry
//! is formatted.

pub mod registry;

pub use registry::{select, VARIANTS};

use crate::sheet::{CheatEntry, CheatSheet};
use std::fmt;
use std::io::{self, Write};

/// Output style for a cheat sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Renderer {
    /// One entry per line, descriptions padded to a common width
    #[default]
    Inline,
    /// Description on one line, value indented on the next
    Breakline,
    /// One JSON object per line
    Json,
}

impl Renderer {
    /// Registered name of this renderer
    pub const fn name(&self) -> &'static str {
        match self {
            Renderer::Inline => "inline",
            Renderer::Breakline => "breakline",
            Renderer::Json => "json",
        }
    }

    /// Write every entry of `sheet` to `out`
    ///
    /// An empty sheet writes nothing.
    pub fn render<W: Write>(&self, sheet: &CheatSheet, out: &mut W) -> io::Result<()> {
        match self {
            Renderer::Inline => {
                let width = sheet.description_width();
                write_entries(sheet, out, |e| {
                    Ok(format!("{:<width$} {}", e.description, e.value, width = width))
                })
            }
            Renderer::Breakline => {
                write_entries(sheet, out, |e| Ok(format!("{}\n {}", e.description, e.value)))
            }
            Renderer::Json => write_entries(sheet, out, |e| {
                serde_json::to_string(e).map_err(io::Error::other)
            }),
        }
    }
}

impl fmt::Display for Renderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Write each entry formatted by `format_entry`, followed by a newline
///
/// Stops at the first entry that fails to format.
pub fn write_entries<W, F>(sheet: &CheatSheet, out: &mut W, format_entry: F) -> io::Result<()>
where
    W: Write,
    F: Fn(&CheatEntry) -> io::Result<String>,
{
    for entry in sheet {
        let line = format_entry(entry)?;
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
