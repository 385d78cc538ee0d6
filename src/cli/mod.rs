//! Command-line interface for reqaudit.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`command`] - The audit command and its result

pub mod args;
pub mod command;

pub use args::Cli;
pub use command::{resolve_project_root, AuditCommand, CommandResult};
