//! Error types for flagpatch-core

use std::path::PathBuf;

/// Result type for flagpatch-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while patching a header
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The target header does not exist
    #[error("Cannot find header file {path}")]
    FileNotFound { path: PathBuf },

    /// The target exists but is a directory or other non-file
    #[error("Not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// A marker name that cannot appear in a `#define`
    #[error("Invalid marker {name:?}: {reason}")]
    InvalidMarker { name: String, reason: String },

    /// Filesystem error from flagpatch-fs
    #[error(transparent)]
    Fs(#[from] flagpatch_fs::Error),
}
