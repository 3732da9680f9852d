//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod list;
pub mod show;

pub use list::run_list;
pub use show::run_show;
