//! Error types for packaging operations
//!
//! Resource-level problems are never returned from `package`; they are
//! absorbed as "leave the reference unchanged" and only show up in the
//! [`PackageReport`](crate::PackageReport) and the log.

use std::path::PathBuf;

/// Result type alias for packaging operations
pub type PackageResult<T> = Result<T, PackageError>;

/// Error types for packaging operations
#[derive(Debug, thiserror::Error)]
pub enum PackageError {
    /// The resource directory could not be canonicalized or is not a directory
    #[error("Invalid base directory {}: {source}", path.display())]
    InvalidBaseDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input could not be handled as markup at all
    #[error("Malformed markup: {0}")]
    MalformedMarkup(String),

    /// Reading the converter's HTML file failed
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
