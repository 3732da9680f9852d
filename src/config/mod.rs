//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::error::RenderError;
use crate::render::{select, Renderer};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory searched for sheets when none is configured, relative to the
/// current directory
pub const DEFAULT_SHEETS_DIR: &str = "config";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,
}

/// General configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Directory holding the `.ini` sheets
    pub sheets_dir: Option<PathBuf>,
    /// Renderer used when no style flag is given
    pub default_style: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            sheets_dir: None,
            default_style: Renderer::default().name().to_string(),
        }
    }
}

impl Config {
    /// Renderer named by `default_style`
    ///
    /// # Errors
    /// Returns `RenderError::UnknownVariant` if the style is not registered
    pub fn renderer(&self) -> Result<Renderer, RenderError> {
        select(&self.general.default_style)
    }

    /// Directory to look for sheets in
    pub fn sheets_dir(&self) -> PathBuf {
        match &self.general.sheets_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()
                .map(|cwd| cwd.join(DEFAULT_SHEETS_DIR))
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SHEETS_DIR)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.general.default_style, "inline");
        assert_eq!(config.renderer(), Ok(Renderer::Inline));
        assert!(config.sheets_dir().ends_with(DEFAULT_SHEETS_DIR));
    }

    #[test]
    fn test_parse_toml() {
        let config: Config = toml::from_str(
            r#"
            [general]
            sheets_dir = "/srv/cheats"
            default_style = "breakline"
            "#,
        )
        .unwrap();

        assert_eq!(config.sheets_dir(), PathBuf::from("/srv/cheats"));
        assert_eq!(config.renderer(), Ok(Renderer::Breakline));
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str("[general]\n").unwrap();
        assert_eq!(config.renderer(), Ok(Renderer::Inline));
        assert!(config.general.sheets_dir.is_none());
    }

    #[test]
    fn test_unknown_style() {
        let mut config = Config::default();
        config.general.default_style = "fancy".to_string();
        assert!(matches!(
            config.renderer(),
            Err(RenderError::UnknownVariant(_))
        ));
    }
}
