//! Duplicate package detection.
//!
//! This rule detects packages listed more than once in the primary manifest.

use std::collections::HashSet;

use crate::audit::{AuditContext, AuditRule, Diagnostic, DiagnosticKind, RuleId};

/// Detects packages listed more than once.
///
/// Emits one diagnostic per repeated name, at its second occurrence.
pub struct DuplicatePackageRule;

impl AuditRule for DuplicatePackageRule {
    fn id(&self) -> RuleId {
        RuleId::new("duplicate-package")
    }

    fn name(&self) -> &str {
        "Duplicate Package"
    }

    fn description(&self) -> &str {
        "Detects packages listed more than once"
    }

    fn kind(&self) -> DiagnosticKind {
        DiagnosticKind::Duplicate
    }

    fn check(&self, ctx: &AuditContext<'_>) -> Vec<Diagnostic> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        let mut diagnostics = Vec::new();

        for entry in &ctx.primary.entries {
            let name = entry.name.as_str();
            if !seen.insert(name) && reported.insert(name) {
                diagnostics.push(
                    Diagnostic::new(
                        self.kind(),
                        name,
                        format!("Package '{}' is listed more than once", name),
                    )
                    .with_location(&ctx.primary.path, entry.line),
                );
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::rules::test_support::check;

    #[test]
    fn detects_duplicate() {
        let diagnostics = check(&DuplicatePackageRule, "requests==2.0\nrequests>=2.1\n");

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].package, "requests");
        assert_eq!(diagnostics[0].kind, DiagnosticKind::Duplicate);
    }

    #[test]
    fn reports_at_second_occurrence() {
        let diagnostics = check(&DuplicatePackageRule, "flask\nrequests\n\nflask\n");

        assert_eq!(diagnostics[0].location.as_ref().unwrap().line, 4);
    }

    #[test]
    fn triple_occurrence_reported_once() {
        let diagnostics = check(&DuplicatePackageRule, "numpy\nnumpy\nnumpy\n");

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_ref().unwrap().line, 2);
    }

    #[test]
    fn orders_by_second_occurrence() {
        let diagnostics = check(&DuplicatePackageRule, "a\nb\nb\na\n");

        let names: Vec<_> = diagnostics.iter().map(|d| d.package.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn names_are_case_sensitive() {
        let diagnostics = check(&DuplicatePackageRule, "PyYAML\npyyaml\n");

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn passes_without_duplicates() {
        let diagnostics = check(&DuplicatePackageRule, "flask\nrequests\nnumpy\n");

        assert!(diagnostics.is_empty());
    }
}
