//! List command implementation
//!
//! Prints the display name of every available sheet.

use crate::error::Result;
use crate::sheet::list_sheets;

use std::io::{self, Write};
use std::path::Path;

/// Execute the list command
pub fn run_list(dir: &Path) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_list(dir, &mut handle)?;
    handle.flush()?;
    Ok(())
}

/// Write one ` {name}` line per sheet found below `dir`
pub fn write_list<W: Write>(dir: &Path, out: &mut W) -> Result<()> {
    let sheets = list_sheets(dir)?;
    log::debug!("Found {} sheets in {}", sheets.len(), dir.display());

    for sheet in &sheets {
        writeln!(out, " {}", sheet.name)?;
    }

    Ok(())
}
