//! Report output formatters.
//!
//! This module provides formatters for writing an [`AuditReport`]
//! in different formats (human-readable, JSON).

pub mod human;
pub mod json;

use crate::audit::AuditReport;
use std::io::Write;

/// Output format for audit reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per finding
    #[default]
    Human,
    /// Pretty-printed JSON document
    Json,
}

/// Trait for formatting audit output.
pub trait ReportFormatter {
    /// Format the report to the given writer.
    fn format<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()>;
}

pub use human::{HumanFormatter, SUCCESS_LINE};
pub use json::JsonFormatter;
