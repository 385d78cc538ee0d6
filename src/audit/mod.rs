//! Manifest auditing.
//!
//! The audit system consists of:
//!
//! - **Rules** - Individual checks over the primary manifest ([`AuditRule`])
//! - **Registry** - Ordered collection of rules ([`RuleRegistry`])
//! - **Engine** - Runs the rules and derives suggestions ([`AuditEngine`])
//! - **Diagnostics** - Findings tied to a package ([`Diagnostic`])
//!
//! # Example
//!
//! ```
//! use reqaudit::audit::{AuditEngine, DiagnosticKind};
//! use reqaudit::manifest::Manifest;
//!
//! let primary = Manifest::parse("python-requirements.txt", "torch==2.2\n");
//! let extras = Manifest::missing("scripts/python-requirements-ml.txt");
//!
//! let report = AuditEngine::default().run(&primary, &extras);
//! assert_eq!(report.diagnostics[0].kind, DiagnosticKind::HeavyInMain);
//! assert_eq!(report.suggestions.len(), 1);
//! assert_eq!(report.exit_code(), 2);
//! ```

pub mod config;
pub mod diagnostic;
pub mod engine;
pub mod registry;
pub mod rule;
pub mod rules;

pub use config::{AuditConfig, HEAVY_PACKAGES, STDLIB_NAMES};
pub use diagnostic::{Diagnostic, DiagnosticKind, Location};
pub use engine::{AuditEngine, AuditReport, EXIT_CLEAN, EXIT_ISSUES};
pub use registry::RuleRegistry;
pub use rule::{AuditContext, AuditRule, RuleId};
pub use rules::{DuplicatePackageRule, HeavyInMainRule, StdlibAsDependencyRule};
