//! CLI argument definitions using clap derive

use crate::render::Renderer;
use clap::{ArgGroup, CommandFactory, Parser};
use clap_complete::Shell;
use std::path::PathBuf;

/// Cool command-line cheat sheets
///
/// Prints the `[cheats]` section of `<DIR>/<SHEET>.ini`.
#[derive(Parser, Debug)]
#[command(name = "cheat")]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("style").args(["inline", "breakline", "json"])))]
pub struct Cli {
    /// The cheat sheet you want to see
    #[arg(required_unless_present_any = ["list", "completions"])]
    pub sheet: Option<String>,

    /// One cheat per line, this is the default
    #[arg(short = 'l')]
    pub inline: bool,

    /// Break the line after each description
    #[arg(short = 'b')]
    pub breakline: bool,

    /// One JSON object per cheat
    #[arg(short = 'j')]
    pub json: bool,

    /// List available cheat sheets
    #[arg(long, conflicts_with = "sheet")]
    pub list: bool,

    /// Directory holding the cheat sheets
    #[arg(short, long, env = "CHEAT_DIR")]
    pub dir: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, env = "CHEAT_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completions
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Renderer chosen by the style flags, if any
    pub fn style(&self) -> Option<Renderer> {
        if self.breakline {
            Some(Renderer::Breakline)
        } else if self.json {
            Some(Renderer::Json)
        } else if self.inline {
            Some(Renderer::Inline)
        } else {
            None
        }
    }
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_sheet() {
        let args = Cli::try_parse_from(["cheat", "git"]).unwrap();
        assert_eq!(args.sheet.as_deref(), Some("git"));
        assert_eq!(args.style(), None);
    }

    #[test]
    fn test_cli_parse_styles() {
        let args = Cli::try_parse_from(["cheat", "-l", "git"]).unwrap();
        assert_eq!(args.style(), Some(Renderer::Inline));

        let args = Cli::try_parse_from(["cheat", "-b", "git"]).unwrap();
        assert_eq!(args.style(), Some(Renderer::Breakline));

        let args = Cli::try_parse_from(["cheat", "git", "-j"]).unwrap();
        assert_eq!(args.style(), Some(Renderer::Json));
    }

    #[test]
    fn test_cli_styles_mutually_exclusive() {
        let result = Cli::try_parse_from(["cheat", "-l", "-b", "git"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_sheet_required() {
        let result = Cli::try_parse_from(["cheat"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_list() {
        let args = Cli::try_parse_from(["cheat", "--list", "--dir", "/srv/cheats"]).unwrap();
        assert!(args.list);
        assert!(args.sheet.is_none());
        assert_eq!(args.dir, Some(PathBuf::from("/srv/cheats")));
    }

    #[test]
    fn test_cli_parse_completions() {
        let args = Cli::try_parse_from(["cheat", "--completions", "bash"]).unwrap();
        assert_eq!(args.completions, Some(Shell::Bash));
    }

    #[test]
    fn test_cli_parse_verbose() {
        let args = Cli::try_parse_from(["cheat", "-v", "git"]).unwrap();
        assert!(args.verbose);
    }

    #[test]
    fn test_cli_debug_assert() {
        Cli::command().debug_assert();
    }
}
