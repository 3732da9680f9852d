//! cheat - command-line cheat sheets
//!
//! Cheat sheets are INI files with a `[main]` section naming the sheet and a
//! `[cheats]` section of `description = value` lines. This library locates,
//! parses and renders them.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`error`]: Error types
//! - [`render`]: Output styles
//! - [`sheet`]: Sheet files and discovery

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod render;
pub mod sheet;

pub use error::{AppError, Result};
pub use render::Renderer;
pub use sheet::{CheatEntry, CheatSheet};
