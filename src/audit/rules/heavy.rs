//! Heavy package placement.
//!
//! This rule detects large optional packages in the primary manifest that
//! belong in the supplementary manifest instead.

use crate::audit::{AuditContext, AuditRule, Diagnostic, DiagnosticKind, RuleId};

/// Detects heavy packages listed in the primary manifest.
pub struct HeavyInMainRule;

impl AuditRule for HeavyInMainRule {
    fn id(&self) -> RuleId {
        RuleId::new("heavy-in-main")
    }

    fn name(&self) -> &str {
        "Heavy In Main"
    }

    fn description(&self) -> &str {
        "Detects heavy optional packages in the primary manifest"
    }

    fn kind(&self) -> DiagnosticKind {
        DiagnosticKind::HeavyInMain
    }

    fn check(&self, ctx: &AuditContext<'_>) -> Vec<Diagnostic> {
        ctx.primary
            .entries
            .iter()
            .filter(|entry| ctx.config.is_heavy(&entry.name))
            .map(|entry| {
                Diagnostic::new(
                    self.kind(),
                    &entry.name,
                    format!(
                        "'{}' is a heavy package; move it to '{}'",
                        entry.name, ctx.config.supplementary_name
                    ),
                )
                .with_location(&ctx.primary.path, entry.line)
            })
            .collect()
    }
}
