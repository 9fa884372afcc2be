//! Filesystem metadata access.
//!
//! The traversal engine never touches `std::fs` directly; it goes through a
//! [`MetadataProvider`]. [`FsMetadata`] is the real implementation, other
//! providers can be plugged in for testing.

use std::fs::{self, Metadata};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::SizeError;

/// Snapshot of the facts the traversal needs about one filesystem entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMetadata {
    /// Full path of the entry
    pub path: PathBuf,

    /// Final path component, empty for `.`, `..` and roots
    pub name: String,

    /// Whether the entry is a directory (never true for a symlink)
    pub is_dir: bool,

    /// Whether the entry itself is a symbolic link
    pub is_symlink: bool,

    /// Logical length in bytes
    pub len: u64,

    /// Platform hidden attribute (Windows only, `false` elsewhere)
    pub hidden_attr: bool,
}

impl EntryMetadata {
    /// Build a snapshot from link-aware metadata.
    #[must_use]
    pub fn from_metadata(path: &Path, metadata: &Metadata) -> Self {
        let file_type = metadata.file_type();

        Self {
            path: path.to_path_buf(),
            name: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
            is_dir: file_type.is_dir(),
            is_symlink: file_type.is_symlink(),
            len: metadata.len(),
            hidden_attr: has_hidden_attribute(metadata),
        }
    }
}

#[cfg(windows)]
fn has_hidden_attribute(metadata: &Metadata) -> bool {
    use std::os::windows::fs::MetadataExt;

    const FILE_ATTRIBUTE_HIDDEN: u32 = 0x2;
    metadata.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0
}

#[cfg(not(windows))]
const fn has_hidden_attribute(_metadata: &Metadata) -> bool {
    false
}

/// Source of filesystem metadata for the traversal engine.
pub trait MetadataProvider {
    /// Stat a path without following a trailing symlink.
    ///
    /// # Errors
    ///
    /// Returns a [`SizeError`] if the path does not exist or cannot be accessed.
    fn stat(&self, path: &Path) -> Result<EntryMetadata, SizeError>;

    /// List the immediate entries of a directory.
    ///
    /// The outer error means the directory itself could not be listed; an
    /// inner error means a single child could not be stat'd.
    ///
    /// # Errors
    ///
    /// Returns a [`SizeError`] if the directory cannot be opened or read.
    fn read_dir(&self, dir: &Path) -> Result<Vec<Result<EntryMetadata, SizeError>>, SizeError>;
}

/// [`MetadataProvider`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsMetadata;

impl MetadataProvider for FsMetadata {
    fn stat(&self, path: &Path) -> Result<EntryMetadata, SizeError> {
        fs::symlink_metadata(path)
            .map(|metadata| EntryMetadata::from_metadata(path, &metadata))
            .map_err(|e| SizeError::io(path, e))
    }

    fn read_dir(&self, dir: &Path) -> Result<Vec<Result<EntryMetadata, SizeError>>, SizeError> {
        let mut entries = Vec::new();

        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
        {
            match entry {
                Ok(entry) => entries.push(
                    entry
                        .metadata()
                        .map(|metadata| EntryMetadata::from_metadata(entry.path(), &metadata))
                        .map_err(|e| SizeError::io(entry.path(), std::io::Error::from(e))),
                ),
                // An error carrying the directory's own path means it could not be opened.
                Err(e) if e.path().is_none_or(|p| p == dir) => {
                    return Err(SizeError::io(dir, std::io::Error::from(e)));
                }
                Err(e) => {
                    let path = e.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
                    entries.push(Err(SizeError::io(path, std::io::Error::from(e))));
                }
            }
        }

        Ok(entries)
    }
}
