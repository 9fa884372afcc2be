//! Error and warning types for size computation.
//!
//! Fatal problems (the target path itself cannot be stat'd) are reported as a
//! [`SizeError`]. Problems deeper in the tree are absorbed into the result as
//! [`SizeWarning`] values so that a best-effort total can still be printed.

use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while measuring a path.
#[derive(Debug, Error)]
pub enum SizeError {
    /// The path does not exist.
    #[error("Path not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// Permission was denied for the path.
    #[error("Permission denied: {}", path.display())]
    AccessDenied { path: PathBuf },

    /// Any other I/O failure.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SizeError {
    /// Create an error with path context, classifying it by [`io::ErrorKind`].
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::AccessDenied { path },
            _ => Self::Io { path, source },
        }
    }

    /// The path the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path } | Self::AccessDenied { path } | Self::Io { path, .. } => path,
        }
    }
}

/// Kind of non-fatal problem met during traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// A directory could not be listed; its subtree counts as zero.
    UnreadableDir,

    /// A single directory entry could not be stat'd; it counts as zero.
    UnreadableEntry,
}

/// Non-fatal warning collected during traversal.
#[derive(Debug, Clone, Serialize)]
pub struct SizeWarning {
    /// Path where the problem occurred.
    pub path: PathBuf,

    /// Human-readable message.
    pub message: String,

    /// Kind of warning.
    pub kind: WarningKind,
}

impl SizeWarning {
    /// Warning for a directory that could not be listed.
    #[must_use]
    pub fn unreadable_dir(error: &SizeError) -> Self {
        Self {
            path: error.path().to_path_buf(),
            message: format!("cannot read dir: {error}"),
            kind: WarningKind::UnreadableDir,
        }
    }

    /// Warning for an entry whose metadata could not be read.
    #[must_use]
    pub fn unreadable_entry(error: &SizeError) -> Self {
        Self {
            path: error.path().to_path_buf(),
            message: format!("cannot stat: {error}"),
            kind: WarningKind::UnreadableEntry,
        }
    }
}
