//! Audit diagnostic messages.
//!
//! This module provides the [`Diagnostic`] type for representing
//! issues found in a manifest, with optional source location tracking
//! for machine-readable output.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// The kind of issue a diagnostic reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticKind {
    /// A package listed more than once.
    Duplicate,
    /// A standard-library module listed as an external dependency.
    StdlibAsDep,
    /// A heavy optional package listed in the primary manifest.
    HeavyInMain,
}

impl DiagnosticKind {
    /// The report label for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::Duplicate => "DUPLICATE",
            DiagnosticKind::StdlibAsDep => "STDLIB_AS_DEP",
            DiagnosticKind::HeavyInMain => "HEAVY_IN_MAIN",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where in a manifest a diagnostic points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Manifest path.
    pub file: PathBuf,
    /// Line (1-indexed).
    pub line: usize,
}

/// A diagnostic produced by an audit rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// What kind of issue this is.
    pub kind: DiagnosticKind,
    /// Package the issue is about.
    pub package: String,
    /// Human-readable explanation.
    pub message: String,
    /// Optional source location.
    pub location: Option<Location>,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(
        kind: DiagnosticKind,
        package: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            package: package.into(),
            message: message.into(),
            location: None,
        }
    }

    /// Attach a source location.
    pub fn with_location(mut self, file: impl Into<PathBuf>, line: usize) -> Self {
        self.location = Some(Location {
            file: file.into(),
            line,
        });
        self
    }
}
