//! Configuration builder
//!
//! Merges configuration from files and CLI arguments.

use crate::config::{Config, ConfigFile};
use crate::error::ConfigError;
use crate::render::Renderer;

use std::path::PathBuf;

/// Builder for merging configuration sources
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Load configuration from a file
    ///
    /// An explicit path must load; without one the default locations are
    /// tried and silently skipped when absent.
    pub fn with_file(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        let file_config = match path {
            Some(path) => Some(ConfigFile::load(path)?),
            None => ConfigFile::load_default(),
        };

        if let Some(cfg) = file_config {
            self.config = cfg;
        }

        Ok(self)
    }

    /// Override with CLI sheet directory
    pub fn with_sheets_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(d) = dir {
            self.config.general.sheets_dir = Some(d);
        }
        self
    }

    /// Override with CLI style flag
    pub fn with_style(mut self, style: Option<Renderer>) -> Self {
        if let Some(s) = style {
            self.config.general.default_style = s.name().to_string();
        }
        self
    }

    /// Build the final configuration
    pub fn build(self) -> Config {
        self.config
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builder_defaults() {
        let config = ConfigBuilder::new().build();
        assert_eq!(config.renderer(), Ok(Renderer::Inline));
        assert!(config.general.sheets_dir.is_none());
    }

    #[test]
    fn test_builder_overrides() {
        let config = ConfigBuilder::new()
            .with_sheets_dir(Some(PathBuf::from("/srv/cheats")))
            .with_style(Some(Renderer::Breakline))
            .build();

        assert_eq!(config.sheets_dir(), PathBuf::from("/srv/cheats"));
        assert_eq!(config.renderer(), Ok(Renderer::Breakline));
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        tmp.write_all(b"[general]\nsheets_dir = \"/from/file\"\ndefault_style = \"json\"\n")
            .unwrap();

        let config = ConfigBuilder::new()
            .with_file(tmp.path().to_str())
            .unwrap()
            .with_style(Some(Renderer::Inline))
            .build();

        assert_eq!(config.sheets_dir(), PathBuf::from("/from/file"));
        assert_eq!(config.renderer(), Ok(Renderer::Inline));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let result = ConfigBuilder::new().with_file(Some("/nonexistent/cheat.toml"));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }
}
