//! reqaudit - Static auditor for Python requirements manifests.
//!
//! reqaudit reads a primary manifest (`python-requirements.txt`) and checks
//! for an optional supplementary manifest of heavy extras
//! (`scripts/python-requirements-ml.txt`), then reports obvious authoring
//! mistakes before they reach a build or CI pipeline.
//!
//! # Modules
//!
//! - [`audit`] - Audit rules, registry and engine
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Manifest discovery and parsing
//! - [`report`] - Report formatters
//!
//! # Example
//!
//! ```
//! use reqaudit::audit::AuditEngine;
//! use reqaudit::manifest::Manifest;
//!
//! let primary = Manifest::parse(
//!     "python-requirements.txt",
//!     "requests==2.0\nrequests>=2.1\nasyncio\ntorch\n",
//! );
//! let extras = Manifest::parse("scripts/python-requirements-ml.txt", "");
//!
//! let report = AuditEngine::default().run(&primary, &extras);
//! let lines: Vec<_> = report
//!     .diagnostics
//!     .iter()
//!     .map(|d| format!("{}: {}", d.kind, d.package))
//!     .collect();
//! assert_eq!(
//!     lines,
//!     ["DUPLICATE: requests", "STDLIB_AS_DEP: asyncio", "HEAVY_IN_MAIN: torch"]
//! );
//! ```

pub mod audit;
pub mod cli;
pub mod error;
pub mod manifest;
pub mod report;

pub use error::{AuditError, Result};
