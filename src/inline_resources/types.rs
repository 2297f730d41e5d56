//! Type definitions for resource inlining

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{PackageError, PackageResult};

/// Canonical directory that holds the converter's side resources
///
/// Every embedded file must resolve to a path below this directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDirectory(PathBuf);

impl BaseDirectory {
    /// Canonicalize `path` and check that it is a directory
    pub fn new(path: impl AsRef<Path>) -> PackageResult<Self> {
        let path = path.as_ref();
        let canonical =
            fs::canonicalize(path).map_err(|source| PackageError::InvalidBaseDirectory {
                path: path.to_path_buf(),
                source,
            })?;

        if !canonical.is_dir() {
            return Err(PackageError::InvalidBaseDirectory {
                path: path.to_path_buf(),
                source: std::io::Error::other("not a directory"),
            });
        }

        Ok(Self(canonical))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Component-wise containment: `/data/base2/x` is not inside `/data/base`.
    /// `candidate` must already be canonical.
    #[must_use]
    pub fn contains(&self, candidate: &Path) -> bool {
        candidate.starts_with(&self.0)
    }
}

impl AsRef<Path> for BaseDirectory {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

/// Classification of a reference found in an attribute or `url()` token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReferenceKind {
    /// `http:` or `https:`
    Remote,
    /// `data:`
    AlreadyEmbedded,
    /// Relative or absolute filesystem path
    Local,
}

/// A local file that passed the containment and existence checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    pub(crate) path: PathBuf,
    pub(crate) size: u64,
}

impl ResolvedResource {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File size observed during resolution
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }
}

/// Why a reference did not resolve to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum Unresolved {
    #[error("remote reference")]
    Remote,
    #[error("already a data URI")]
    AlreadyEmbedded,
    #[error("empty reference")]
    Empty,
    #[error("resolves outside the base directory")]
    OutsideBase,
    #[error("file not found")]
    Missing,
    #[error("not a regular file")]
    NotAFile,
}

impl Unresolved {
    /// Remote, embedded and empty references are expected and never reported
    #[must_use]
    pub fn is_passthrough(self) -> bool {
        matches!(self, Self::Remote | Self::AlreadyEmbedded | Self::Empty)
    }
}

/// Why a resolved file could not be turned into embedded content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum EncodeFailure {
    #[error("read failed: {0}")]
    Read(String),
    #[error("{size} bytes exceeds limit of {limit} bytes")]
    TooLarge { size: u64, limit: u64 },
    #[error("stylesheet is not valid UTF-8")]
    NotText,
}

/// Reason recorded for a local reference that was left untouched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum SkipReason {
    #[error(transparent)]
    Unresolved(#[from] Unresolved),
    #[error(transparent)]
    Encode(#[from] EncodeFailure),
}

/// Where a reference was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResourceKind {
    /// `<img src>`
    Image,
    /// `<link rel="stylesheet" href>`
    Stylesheet,
    /// `url()` inside a `<style>` block, `style=""` attribute or linked stylesheet
    CssUrl,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Image => write!(f, "Image"),
            ResourceKind::Stylesheet => write!(f, "Stylesheet"),
            ResourceKind::CssUrl => write!(f, "CSS url()"),
        }
    }
}

/// A local reference that was kept as-is
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedReference {
    pub reference: String,
    pub kind: ResourceKind,
    pub reason: SkipReason,
}

/// Result of packaging with embed and skip tracking
#[derive(Debug, Clone, Serialize)]
pub struct PackageReport {
    #[serde(skip)]
    pub html: String,
    pub embedded: usize,
    pub skipped: Vec<SkippedReference>,
}

impl PackageReport {
    /// Total number of local references processed
    #[must_use]
    pub fn total(&self) -> usize {
        self.embedded + self.skipped.len()
    }

    #[must_use]
    pub fn has_skips(&self) -> bool {
        !self.skipped.is_empty()
    }

    /// Get skip rate as a ratio between 0.0 and 1.0
    #[must_use]
    pub fn skip_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            self.skipped.len() as f64 / total as f64
        }
    }
}
