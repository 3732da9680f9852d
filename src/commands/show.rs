//! Show command implementation
//!
//! Loads a single sheet and renders it.

use crate::config::Config;
use crate::error::Result;
use crate::render::Renderer;
use crate::sheet::{sheet_path, CheatFile};

use std::io::{self, Write};
use std::path::Path;

/// Execute the show command, printing to stdout
pub fn run_show(name: &str, config: &Config) -> Result<()> {
    let renderer = config.renderer()?;
    let dir = config.sheets_dir();

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    show_sheet(&dir, name, renderer, &mut handle)?;
    handle.flush()?;

    Ok(())
}

/// Load `<dir>/<name>.ini` and render its cheats to `out`
///
/// Nothing is written unless the sheet loads completely.
pub fn show_sheet<W: Write>(dir: &Path, name: &str, renderer: Renderer, out: &mut W) -> Result<()> {
    let path = sheet_path(dir, name);
    log::debug!("Showing {} as {}", path.display(), renderer);

    let file = CheatFile::load(&path)?;
    let sheet = file.cheats()?;
    log::debug!("{} entries in {}", sheet.len(), path.display());

    renderer.render(&sheet, out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, SheetError};
    use std::fs;

    fn show(dir: &Path, name: &str, renderer: Renderer) -> (Result<()>, String) {
        let mut buf = Vec::new();
        let result = show_sheet(dir, name, renderer, &mut buf);
        (result, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_show_sheet() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join("vim.ini"),
            "[main]\nname = Vim\n\n[cheats]\nzeta = 1\nalpha = 2\n",
        )
        .unwrap();

        let (result, output) = show(tmp.path(), "vim", Renderer::Breakline);
        assert!(result.is_ok());
        assert_eq!(output, "zeta\n 1\nalpha\n 2\n");
    }

    #[test]
    fn test_show_missing_sheet() {
        let tmp = tempfile::tempdir().unwrap();

        let (result, output) = show(tmp.path(), "nope", Renderer::Inline);
        match result {
            Err(AppError::Sheet(SheetError::FileNotFound(path))) => {
                assert_eq!(path, tmp.path().join("nope.ini"));
            }
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
        assert!(output.is_empty());
    }

    #[test]
    fn test_show_sheet_without_cheats() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("bare.ini"), "[main]\nname = Bare\n").unwrap();

        let (result, output) = show(tmp.path(), "bare", Renderer::Inline);
        assert!(matches!(
            result,
            Err(AppError::Sheet(SheetError::MissingSection { .. }))
        ));
        assert!(output.is_empty());
    }
}
