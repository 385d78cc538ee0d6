//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::Parser;
use std::path::PathBuf;

use crate::report::OutputFormat;

/// reqaudit - Catch obvious mistakes in Python requirements manifests.
#[derive(Debug, Parser)]
#[command(name = "reqaudit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long)]
    pub project: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// List the built-in rules and exit
    #[arg(long)]
    pub list_rules: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}
