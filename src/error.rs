//! Error types for reqaudit operations.
//!
//! This module defines [`AuditError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Findings about a manifest are diagnostics, never errors
//! - Use `AuditError` for failures that abort the run
//! - Use `anyhow::Error` (via `AuditError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for reqaudit operations.
#[derive(Debug, Error)]
pub enum AuditError {
    /// A manifest exists but could not be read (permissions, invalid UTF-8).
    #[error("Failed to read manifest at {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper, used when writing the report fails.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for reqaudit operations.
pub type Result<T> = std::result::Result<T, AuditError>;
