//! Size computation for files and directory trees.
//!
//! This module provides the traversal engine: given a path and a
//! [`TraversalPolicy`], it stats the path and, for directories, walks the
//! tree depth-first summing the logical byte length of every counted file.
//!
//! Only the initial stat can fail the computation. Directories or entries that
//! cannot be read further down contribute zero and are reported as
//! [`SizeWarning`]s in the resulting [`SizeReport`].

use std::path::{Path, PathBuf};

use crate::{
    config::TraversalPolicy,
    error::{SizeError, SizeWarning},
    metadata::{FsMetadata, MetadataProvider},
};

/// Outcome of a successful size computation.
#[derive(Debug, Clone, Default)]
pub struct SizeReport {
    /// Total logical size in bytes
    pub bytes: u64,

    /// Non-fatal problems met while walking the tree
    pub warnings: Vec<SizeWarning>,
}

/// Size calculator bound to one policy and one metadata source.
///
/// The `Traversal` struct holds no state between calls: every call to
/// [`Traversal::compute_size`] starts from a fresh accumulator, so one
/// instance can be reused and independent instances can run concurrently.
#[derive(Debug, Clone)]
pub struct Traversal<P = FsMetadata> {
    /// Which entries count toward the total
    policy: TraversalPolicy,

    /// Where metadata comes from
    provider: P,
}

impl Traversal {
    /// Create a traversal over the local filesystem.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::path::Path;
    /// # use path_size::{config::TraversalPolicy, traversal::Traversal};
    /// let traversal = Traversal::new(TraversalPolicy::new(true, false));
    /// let report = traversal.compute_size(Path::new(".")).unwrap();
    /// println!("{} bytes", report.bytes);
    /// ```
    #[must_use]
    pub const fn new(policy: TraversalPolicy) -> Self {
        Self {
            policy,
            provider: FsMetadata,
        }
    }
}

impl<P: MetadataProvider> Traversal<P> {
    /// Create a traversal that reads metadata from `provider`.
    #[must_use]
    pub const fn with_provider(policy: TraversalPolicy, provider: P) -> Self {
        Self { policy, provider }
    }

    /// The policy this traversal applies.
    #[must_use]
    pub const fn policy(&self) -> TraversalPolicy {
        self.policy
    }

    /// Compute the size of `path`.
    ///
    /// The path is stat'd without following a trailing symlink. A hidden
    /// target counts as zero unless the policy includes hidden entries; a
    /// non-directory target counts as its own length; a directory is walked.
    ///
    /// # Errors
    ///
    /// Returns a [`SizeError`] if `path` itself cannot be stat'd (missing,
    /// permission denied, ...). Failures below the top level never abort the
    /// computation.
    pub fn compute_size(&self, path: &Path) -> Result<SizeReport, SizeError> {
        let target = self.provider.stat(path)?;

        if self.policy.excludes(&target) {
            return Ok(SizeReport::default());
        }

        if !target.is_dir {
            return Ok(SizeReport {
                bytes: target.len,
                warnings: Vec::new(),
            });
        }

        Ok(self.walk(path))
    }

    /// Walk a directory tree with an explicit worklist.
    ///
    /// In shallow mode only `root` is ever listed, so subdirectories
    /// contribute nothing.
    fn walk(&self, root: &Path) -> SizeReport {
        let mut report = SizeReport::default();
        let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let entries = match self.provider.read_dir(&dir) {
                Ok(entries) => entries,
                Err(e) => {
                    report.warnings.push(SizeWarning::unreadable_dir(&e));
                    continue;
                }
            };

            for entry in entries {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        report.warnings.push(SizeWarning::unreadable_entry(&e));
                        continue;
                    }
                };

                // Symlinks are never counted nor followed
                if entry.is_symlink || self.policy.excludes(&entry) {
                    continue;
                }

                if entry.is_dir {
                    if self.policy.recursive {
                        pending.push(entry.path);
                    }
                    continue;
                }

                report.bytes = report.bytes.saturating_add(entry.len);
            }
        }

        report
    }
}

/// Compute the size of `path` on the local filesystem.
///
/// Shorthand for `Traversal::new(policy).compute_size(path)`.
///
/// # Errors
///
/// Returns a [`SizeError`] if `path` itself cannot be stat'd.
pub fn compute_size(path: &Path, policy: TraversalPolicy) -> Result<SizeReport, SizeError> {
    Traversal::new(policy).compute_size(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WarningKind;
    use crate::metadata::EntryMetadata;
    use std::collections::{BTreeMap, BTreeSet};
    use std::fs;
    use std::io;
    use tempfile::TempDir;

    /// In-memory tree where some directories or entries can be made unreadable.
    #[derive(Clone, Default)]
    struct FakeTree {
        nodes: BTreeMap<PathBuf, EntryMetadata>,
        unreadable_dirs: BTreeSet<PathBuf>,
        unstatable: BTreeSet<PathBuf>,
    }

    impl FakeTree {
        fn add(&mut self, path: &str, is_dir: bool, is_symlink: bool, len: u64) {
            let path = PathBuf::from(path);
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            self.nodes.insert(
                path.clone(),
                EntryMetadata {
                    path,
                    name,
                    is_dir,
                    is_symlink,
                    len,
                    hidden_attr: false,
                },
            );
        }

        fn dir(&mut self, path: &str) {
            self.add(path, true, false, 4096);
        }

        fn file(&mut self, path: &str, len: u64) {
            self.add(path, false, false, len);
        }
    }

    impl MetadataProvider for FakeTree {
        fn stat(&self, path: &Path) -> Result<EntryMetadata, SizeError> {
            self.nodes.get(path).cloned().ok_or_else(|| {
                SizeError::io(path, io::Error::new(io::ErrorKind::NotFound, "missing"))
            })
        }

        fn read_dir(
            &self,
            dir: &Path,
        ) -> Result<Vec<Result<EntryMetadata, SizeError>>, SizeError> {
            if self.unreadable_dirs.contains(dir) {
                return Err(SizeError::io(
                    dir,
                    io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
                ));
            }

            Ok(self
                .nodes
                .iter()
                .filter(|(path, _)| path.parent() == Some(dir))
                .map(|(path, meta)| {
                    if self.unstatable.contains(path) {
                        Err(SizeError::io(path.as_path(), io::Error::other("stat failed")))
                    } else {
                        Ok(meta.clone())
                    }
                })
                .collect())
        }
    }

    fn sample_tree() -> FakeTree {
        let mut tree = FakeTree::default();
        tree.dir("/root");
        tree.file("/root/a.bin", 3);
        tree.file("/root/b.bin", 4);
        tree.dir("/root/sub");
        tree.file("/root/sub/deep.txt", 10);
        tree
    }

    fn size_of(tree: FakeTree, path: &str, recursive: bool, all: bool) -> SizeReport {
        Traversal::with_provider(TraversalPolicy::new(recursive, all), tree)
            .compute_size(Path::new(path))
            .unwrap()
    }

    fn create_file(path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    // ── Fake provider tests ─────────────────────────────────────────────

    #[test]
    fn test_shallow_counts_only_direct_files() {
        assert_eq!(size_of(sample_tree(), "/root", false, false).bytes, 7);
    }

    #[test]
    fn test_recursive_includes_nested_files() {
        assert_eq!(size_of(sample_tree(), "/root", true, false).bytes, 17);
    }

    #[test]
    fn test_directory_own_length_is_not_counted() {
        let mut tree = FakeTree::default();
        tree.dir("/empty");

        let report = size_of(tree, "/empty", true, true);

        assert_eq!(report.bytes, 0);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_unreadable_subtree_contributes_zero_with_warning() {
        let mut tree = sample_tree();
        tree.dir("/root/locked");
        tree.file("/root/locked/inner.bin", 100);
        tree.unreadable_dirs.insert(PathBuf::from("/root/locked"));

        let report = size_of(tree, "/root", true, false);

        assert_eq!(report.bytes, 17);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].kind, WarningKind::UnreadableDir);
        assert_eq!(report.warnings[0].path, PathBuf::from("/root/locked"));
    }

    #[test]
    fn test_unreadable_subtree_ignored_in_shallow_mode() {
        let mut tree = sample_tree();
        tree.dir("/root/locked");
        tree.unreadable_dirs.insert(PathBuf::from("/root/locked"));

        let report = size_of(tree, "/root", false, false);

        assert_eq!(report.bytes, 7);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_unstatable_entry_is_skipped_with_warning() {
        let mut tree = sample_tree();
        tree.unstatable.insert(PathBuf::from("/root/b.bin"));

        let report = size_of(tree, "/root", false, false);

        assert_eq!(report.bytes, 3);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.warnings[0].kind, WarningKind::UnreadableEntry);
    }

    #[test]
    fn test_unreadable_top_level_directory_is_a_warning() {
        let mut tree = sample_tree();
        tree.unreadable_dirs.insert(PathBuf::from("/root"));

        let report = size_of(tree, "/root", true, true);

        assert_eq!(report.bytes, 0);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_missing_target_is_fatal() {
        let result = Traversal::with_provider(TraversalPolicy::default(), sample_tree())
            .compute_size(Path::new("/nope"));

        assert!(matches!(result, Err(SizeError::NotFound { .. })));
    }

    #[test]
    fn test_symlinks_never_count() {
        let mut tree = FakeTree::default();
        tree.dir("/links");
        tree.add("/links/to-file", false, true, 42);
        tree.add("/links/to-dir", false, true, 7);

        for (recursive, all) in [(false, false), (false, true), (true, false), (true, true)] {
            assert_eq!(size_of(tree.clone(), "/links", recursive, all).bytes, 0);
        }
    }

    #[test]
    fn test_hidden_policy_applies_at_every_level() {
        let mut tree = FakeTree::default();
        tree.dir("/p");
        tree.file("/p/.hidden", 5);
        tree.file("/p/shown", 1);
        tree.dir("/p/.cache");
        tree.file("/p/.cache/blob", 100);
        tree.dir("/p/src");
        tree.file("/p/src/.keep", 2);
        tree.file("/p/src/main.rs", 20);

        assert_eq!(size_of(tree.clone(), "/p", true, false).bytes, 21);
        assert_eq!(size_of(tree, "/p", true, true).bytes, 128);
    }

    #[test]
    fn test_sum_saturates_instead_of_wrapping() {
        let mut tree = FakeTree::default();
        tree.dir("/huge");
        tree.file("/huge/a", u64::MAX);
        tree.file("/huge/b", 10);

        assert_eq!(size_of(tree, "/huge", false, false).bytes, u64::MAX);
    }

    #[test]
    fn test_policy_accessor() {
        let policy = TraversalPolicy::new(true, false);
        assert_eq!(Traversal::new(policy).policy(), policy);
    }

    // ── Real filesystem tests ───────────────────────────────────────────

    #[test]
    fn test_compute_size_single_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("f.txt");
        create_file(&file, "hello");

        let report = compute_size(&file, TraversalPolicy::default()).unwrap();
        assert_eq!(report.bytes, 5);
    }

    #[test]
    fn test_compute_size_hidden_file_target() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join(".f.txt");
        create_file(&file, "hello");

        assert_eq!(
            compute_size(&file, TraversalPolicy::new(false, false))
                .unwrap()
                .bytes,
            0
        );
        assert_eq!(
            compute_size(&file, TraversalPolicy::new(false, true))
                .unwrap()
                .bytes,
            5
        );
    }

    #[test]
    fn test_compute_size_with_nested_files() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested");

        create_file(&dir.join("file1.txt"), "hello"); // 5 bytes
        create_file(&dir.join("sub/file2.txt"), "world!"); // 6 bytes
        create_file(&dir.join("sub/deep/file3.txt"), "!"); // 1 byte

        let recursive = compute_size(&dir, TraversalPolicy::new(true, false)).unwrap();
        let shallow = compute_size(&dir, TraversalPolicy::new(false, false)).unwrap();

        assert_eq!(recursive.bytes, 12);
        assert_eq!(shallow.bytes, 5);
    }
}
