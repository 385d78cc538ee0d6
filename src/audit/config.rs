//! Known package names used by the built-in rules.

use std::collections::BTreeSet;

use crate::manifest::SUPPLEMENTARY_MANIFEST;

/// Standard-library modules that should never be listed as dependencies.
pub const STDLIB_NAMES: &[&str] = &["asyncio"];

/// Large optional packages that belong in the supplementary manifest.
pub const HEAVY_PACKAGES: &[&str] = &["torch", "qiskit", "cirq", "transformers"];

/// Immutable configuration for an audit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditConfig {
    /// Names reported as `STDLIB_AS_DEP`.
    pub stdlib_names: BTreeSet<String>,
    /// Names reported as `HEAVY_IN_MAIN`.
    pub heavy_packages: BTreeSet<String>,
    /// File name mentioned in the split suggestion.
    pub supplementary_name: String,
}

impl AuditConfig {
    /// Whether `name` is a known standard-library module.
    pub fn is_stdlib(&self, name: &str) -> bool {
        self.stdlib_names.contains(name)
    }

    /// Whether `name` is a known heavy package.
    pub fn is_heavy(&self, name: &str) -> bool {
        self.heavy_packages.contains(name)
    }
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            stdlib_names: STDLIB_NAMES.iter().map(|s| s.to_string()).collect(),
            heavy_packages: HEAVY_PACKAGES.iter().map(|s| s.to_string()).collect(),
            supplementary_name: SUPPLEMENTARY_MANIFEST.to_string(),
        }
    }
}
