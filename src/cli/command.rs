//! Audit command implementation.
//!
//! Loads both manifests, runs the audit engine, writes the report and
//! selects the exit status.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::audit::{AuditConfig, AuditEngine, AuditReport, RuleRegistry};
use crate::error::Result;
use crate::manifest::{Manifest, ManifestPaths};
use crate::report::{HumanFormatter, JsonFormatter, OutputFormat, ReportFormatter};

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the audit found nothing.
    pub success: bool,

    /// Exit code to use (0 when clean, 2 when anything was found).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

impl From<&AuditReport> for CommandResult {
    fn from(report: &AuditReport) -> Self {
        if report.is_clean() {
            Self::success()
        } else {
            Self::failure(report.exit_code())
        }
    }
}

/// Resolve the project root, falling back to the current directory.
pub fn resolve_project_root(project: Option<PathBuf>) -> Result<PathBuf> {
    match project {
        Some(root) => Ok(root),
        None => Ok(std::env::current_dir().context("Cannot determine current directory")?),
    }
}

/// The audit command implementation.
pub struct AuditCommand {
    project_root: PathBuf,
    format: OutputFormat,
    config: AuditConfig,
}

impl AuditCommand {
    /// Create a new audit command with the built-in configuration.
    pub fn new(project_root: &Path, format: OutputFormat) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            format,
            config: AuditConfig::default(),
        }
    }

    /// Replace the audit configuration.
    pub fn with_config(mut self, config: AuditConfig) -> Self {
        self.config = config;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Load both manifests and audit them.
    pub fn audit(&self) -> Result<AuditReport> {
        let paths = ManifestPaths::discover(&self.project_root);
        tracing::debug!(
            "Auditing {} (supplementary: {})",
            paths.primary.display(),
            paths.supplementary.display()
        );

        let primary = Manifest::load(&paths.primary)?;
        let supplementary = Manifest::load(&paths.supplementary)?;

        let engine = AuditEngine::new(self.config.clone());
        Ok(engine.run(&primary, &supplementary))
    }

    /// Write one line per built-in rule: `id: name - description`.
    pub fn list_rules<W: Write>(&self, writer: &mut W) -> Result<CommandResult> {
        for rule in RuleRegistry::with_builtins().iter() {
            writeln!(
                writer,
                "{}: {} - {}",
                rule.id(),
                rule.name(),
                rule.description()
            )?;
        }
        writer.flush()?;

        Ok(CommandResult::success())
    }

    /// Run the audit and write the report to `writer`.
    pub fn execute<W: Write>(&self, writer: &mut W) -> Result<CommandResult> {
        let report = self.audit()?;

        match self.format {
            OutputFormat::Human => HumanFormatter::new().format(&report, writer)?,
            OutputFormat::Json => JsonFormatter::new().format(&report, writer)?,
        }
        writer.flush()?;

        Ok(CommandResult::from(&report))
    }
}
