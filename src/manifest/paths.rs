//! Manifest file discovery.
//!
//! Both manifests live at fixed locations relative to the project root:
//!
//! 1. Primary manifest (`python-requirements.txt` in the project root)
//! 2. Supplementary heavy-extras manifest
//!    (`scripts/python-requirements-ml.txt`, beside the tool itself)

use std::path::{Path, PathBuf};

/// File name of the primary manifest.
pub const PRIMARY_MANIFEST: &str = "python-requirements.txt";

/// File name of the supplementary manifest holding heavy, optional packages.
pub const SUPPLEMENTARY_MANIFEST: &str = "python-requirements-ml.txt";

/// Directory under the project root where the tool and its supplementary
/// manifest conventionally live.
pub const TOOL_DIR: &str = "scripts";

/// Resolved paths of the two manifests.
///
/// Neither path is required to exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestPaths {
    /// Primary manifest: python-requirements.txt
    pub primary: PathBuf,

    /// Supplementary manifest: scripts/python-requirements-ml.txt
    pub supplementary: PathBuf,
}

impl ManifestPaths {
    /// Resolve manifest paths for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        Self {
            primary: project_root.join(PRIMARY_MANIFEST),
            supplementary: project_root.join(TOOL_DIR).join(SUPPLEMENTARY_MANIFEST),
        }
    }
}
