//! Requirements manifests.
//!
//! - [`paths`] - Locating the primary and supplementary manifests
//! - [`parser`] - Reducing manifest lines to package names

pub mod parser;
pub mod paths;

pub use parser::{parse_line, Manifest, PackageEntry};
pub use paths::{ManifestPaths, PRIMARY_MANIFEST, SUPPLEMENTARY_MANIFEST, TOOL_DIR};
