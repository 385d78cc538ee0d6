//! JSON output formatter.
//!
//! Formats audit reports as machine-readable JSON for tooling integration.

use super::ReportFormatter;
use crate::audit::{AuditReport, DiagnosticKind};
use serde::Serialize;
use std::io::Write;

/// Formats audit output as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    diagnostics: Vec<JsonDiagnostic<'a>>,
    suggestions: &'a [String],
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    kind: DiagnosticKind,
    package: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    duplicates: usize,
    stdlib_as_dep: usize,
    heavy_in_main: usize,
    suggestions: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &AuditReport, writer: &mut W) -> std::io::Result<()> {
        let count = |kind: DiagnosticKind| {
            report
                .diagnostics
                .iter()
                .filter(|d| d.kind == kind)
                .count()
        };

        let diagnostics = report
            .diagnostics
            .iter()
            .map(|d| JsonDiagnostic {
                kind: d.kind,
                package: &d.package,
                message: &d.message,
                file: d.location.as_ref().map(|l| l.file.display().to_string()),
                line: d.location.as_ref().map(|l| l.line),
            })
            .collect();

        let output = JsonOutput {
            diagnostics,
            suggestions: &report.suggestions,
            summary: JsonSummary {
                total: report.diagnostics.len(),
                duplicates: count(DiagnosticKind::Duplicate),
                stdlib_as_dep: count(DiagnosticKind::StdlibAsDep),
                heavy_in_main: count(DiagnosticKind::HeavyInMain),
                suggestions: report.suggestions.len(),
            },
        };

        serde_json::to_writer_pretty(&mut *writer, &output).map_err(std::io::Error::other)?;
        writeln!(writer)?;

        Ok(())
    }
}
