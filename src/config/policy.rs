//! Traversal policy for size computation.
//!
//! This module defines the options that control which entries are counted
//! while a path is measured.

use crate::metadata::EntryMetadata;

/// Configuration for one size computation.
///
/// Built once from CLI input and passed explicitly to the traversal engine;
/// it is never mutated while a tree is being walked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TraversalPolicy {
    /// Whether to descend into subdirectories
    pub recursive: bool,

    /// Whether entries whose name begins with `.` are counted
    pub include_hidden: bool,
}

impl TraversalPolicy {
    /// Create a policy from its two flags.
    #[must_use]
    pub const fn new(recursive: bool, include_hidden: bool) -> Self {
        Self {
            recursive,
            include_hidden,
        }
    }

    /// Whether `entry` must be left out of the total under this policy.
    #[must_use]
    pub fn excludes(&self, entry: &EntryMetadata) -> bool {
        !self.include_hidden && is_hidden(entry)
    }
}

/// Check if an entry is hidden.
///
/// The leading-dot naming convention applies everywhere; the platform hidden
/// attribute is honoured on top of it where the platform has one.
#[must_use]
pub fn is_hidden(entry: &EntryMetadata) -> bool {
    entry.name.starts_with('.') || entry.hidden_attr
}
