//! Unified error types for cheat
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from locating or parsing a cheat sheet
    #[error("Cheat sheet error: {0}")]
    Sheet(#[from] SheetError),

    /// Error from renderer selection
    #[error("Renderer error: {0}")]
    Render(#[from] RenderError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error (writing output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from cheat sheet files
#[derive(Error, Debug)]
pub enum SheetError {
    /// Sheet file does not exist or cannot be read
    #[error("Cheat sheet not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Sheet file is not valid INI syntax
    #[error("Failed to parse {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// Sheet file lacks a required section
    #[error("Missing [{section}] section in {}", .path.display())]
    MissingSection { path: PathBuf, section: String },

    /// Sheet directory does not exist
    #[error("Cheat sheet directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),
}

impl SheetError {
    /// Path of the file or directory the error refers to
    pub fn path(&self) -> &Path {
        match self {
            SheetError::FileNotFound(path) | SheetError::DirectoryNotFound(path) => path,
            SheetError::Parse { path, .. } | SheetError::MissingSection { path, .. } => path,
        }
    }
}

/// Errors from cheat sheet validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The same description appears twice in one sheet
    #[error("Duplicate description: '{0}'")]
    DuplicateDescription(String),
}

/// Errors from renderer selection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No renderer is registered under this name
    #[error("Unknown output style: '{0}' (expected one of: inline, breakline, json)")]
    UnknownVariant(String),
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
