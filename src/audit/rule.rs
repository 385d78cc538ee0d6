//! Audit rule definitions.
//!
//! - [`AuditRule`] - The trait that all audit rules implement
//! - [`RuleId`] - Unique identifier for an audit rule
//! - [`AuditContext`] - Everything a rule may inspect

use super::config::AuditConfig;
use super::diagnostic::{Diagnostic, DiagnosticKind};
use crate::manifest::Manifest;

/// Unique identifier for an audit rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Inputs available to a rule.
#[derive(Debug, Clone, Copy)]
pub struct AuditContext<'a> {
    /// The primary manifest.
    pub primary: &'a Manifest,
    /// The supplementary heavy-extras manifest.
    pub supplementary: &'a Manifest,
    /// Known package names.
    pub config: &'a AuditConfig,
}

/// A check over the primary manifest.
///
/// Rules are independent: each one sees the same context and none
/// depends on the output of another.
pub trait AuditRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// The diagnostic kind this rule emits.
    fn kind(&self) -> DiagnosticKind;

    /// Inspect the context and return any diagnostics, in scan order.
    fn check(&self, ctx: &AuditContext<'_>) -> Vec<Diagnostic>;
}
