//! Audit orchestration.
//!
//! The [`AuditEngine`] runs every registered rule over the primary manifest,
//! then derives suggestions from the manifest set as a whole.

use super::config::AuditConfig;
use super::diagnostic::Diagnostic;
use super::registry::RuleRegistry;
use super::rule::AuditContext;
use crate::manifest::Manifest;

/// Exit status for a clean audit.
pub const EXIT_CLEAN: i32 = 0;

/// Exit status when any diagnostic or suggestion was produced.
pub const EXIT_ISSUES: i32 = 2;

/// Outcome of an audit run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditReport {
    /// Diagnostics in rule order, then scan order.
    pub diagnostics: Vec<Diagnostic>,
    /// Advisory suggestions about the manifest set.
    pub suggestions: Vec<String>,
}

impl AuditReport {
    /// Whether nothing was found.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && self.suggestions.is_empty()
    }

    /// Process exit status for this report.
    pub fn exit_code(&self) -> i32 {
        if self.is_clean() {
            EXIT_CLEAN
        } else {
            EXIT_ISSUES
        }
    }
}

/// Runs audit rules against a pair of manifests.
pub struct AuditEngine {
    registry: RuleRegistry,
    config: AuditConfig,
}

impl AuditEngine {
    /// Create an engine with the built-in rules.
    pub fn new(config: AuditConfig) -> Self {
        Self::with_registry(RuleRegistry::with_builtins(), config)
    }

    /// Create an engine with a custom rule registry.
    pub fn with_registry(registry: RuleRegistry, config: AuditConfig) -> Self {
        Self { registry, config }
    }

    /// Audit the primary manifest and the manifest set.
    ///
    /// Every rule runs regardless of what earlier rules found.
    pub fn run(&self, primary: &Manifest, supplementary: &Manifest) -> AuditReport {
        let ctx = AuditContext {
            primary,
            supplementary,
            config: &self.config,
        };

        let mut diagnostics = Vec::new();
        for rule in self.registry.iter() {
            let found = rule.check(&ctx);
            tracing::debug!("Rule {} produced {} diagnostic(s)", rule.id(), found.len());
            diagnostics.extend(found);
        }

        AuditReport {
            diagnostics,
            suggestions: self.suggestions(&ctx),
        }
    }

    fn suggestions(&self, ctx: &AuditContext<'_>) -> Vec<String> {
        let mut suggestions = Vec::new();

        if !ctx.supplementary.exists {
            tracing::debug!(
                "Supplementary manifest missing at {}",
                ctx.supplementary.path.display()
            );
            suggestions.push(format!(
                "Consider splitting heavy packages into '{}' (optional extras).",
                ctx.config.supplementary_name
            ));
        }

        suggestions
    }
}

impl Default for AuditEngine {
    fn default() -> Self {
        Self::new(AuditConfig::default())
    }
}
