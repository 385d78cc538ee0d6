//! Standard-library misclassification.
//!
//! This rule detects standard-library modules listed as external
//! dependencies. Every occurrence is reported.

use crate::audit::{AuditContext, AuditRule, Diagnostic, DiagnosticKind, RuleId};

/// Detects standard-library modules listed as dependencies.
pub struct StdlibAsDependencyRule;

impl AuditRule for StdlibAsDependencyRule {
    fn id(&self) -> RuleId {
        RuleId::new("stdlib-as-dependency")
    }

    fn name(&self) -> &str {
        "Stdlib As Dependency"
    }

    fn description(&self) -> &str {
        "Detects standard-library modules listed as external dependencies"
    }

    fn kind(&self) -> DiagnosticKind {
        DiagnosticKind::StdlibAsDep
    }

    fn check(&self, ctx: &AuditContext<'_>) -> Vec<Diagnostic> {
        ctx.primary
            .entries
            .iter()
            .filter(|entry| ctx.config.is_stdlib(&entry.name))
            .map(|entry| {
                Diagnostic::new(
                    self.kind(),
                    &entry.name,
                    format!(
                        "'{}' is part of the standard library and should not be a dependency",
                        entry.name
                    ),
                )
                .with_location(&ctx.primary.path, entry.line)
            })
            .collect()
    }
}
