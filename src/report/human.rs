//! Human-readable output formatter.
//!
//! Writes one line per diagnostic (`KIND: package`) followed by one line per
//! suggestion (`SUGGESTION: text`), or a single success line when the report
//! is clean.

use super::ReportFormatter;
use crate::audit::AuditReport;
use std::io::Write;

/// Line printed when nothing was found.
pub const SUCCESS_LINE: &str = "OK: No issues found in requirements.";

/// Formats audit output for human consumption.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()> {
        if report.is_clean() {
            writeln!(writer, "{}", SUCCESS_LINE)?;
            return Ok(());
        }

        for diag in &report.diagnostics {
            writeln!(writer, "{}: {}", diag.kind, diag.package)?;
        }

        for suggestion in &report.suggestions {
            writeln!(writer, "SUGGESTION: {}", suggestion)?;
        }

        Ok(())
    }
}
