//! Rule registry for managing audit rules.
//!
//! The [`RuleRegistry`] stores audit rules in registration order, which is
//! also the order their diagnostics appear in a report.

use super::rule::{AuditRule, RuleId};
use super::rules::{DuplicatePackageRule, HeavyInMainRule, StdlibAsDependencyRule};

/// Ordered collection of audit rules.
pub struct RuleRegistry {
    rules: Vec<Box<dyn AuditRule>>,
}

impl RuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Create a registry with all built-in rules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(DuplicatePackageRule));
        registry.register(Box::new(StdlibAsDependencyRule));
        registry.register(Box::new(HeavyInMainRule));
        registry
    }

    /// Register an audit rule.
    ///
    /// A rule with an already registered ID replaces the old one in place.
    pub fn register(&mut self, rule: Box<dyn AuditRule>) {
        let id = rule.id();
        match self.rules.iter().position(|r| r.id() == id) {
            Some(idx) => self.rules[idx] = rule,
            None => self.rules.push(rule),
        }
    }

    /// Get a rule by ID.
    pub fn get(&self, id: &RuleId) -> Option<&dyn AuditRule> {
        self.rules
            .iter()
            .find(|r| &r.id() == id)
            .map(|r| r.as_ref())
    }

    /// Iterate over all rules in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &dyn AuditRule> {
        self.rules.iter().map(|r| r.as_ref())
    }

    /// Get the number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
