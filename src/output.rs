//! Result rendering for the command line.
//!
//! Plain mode prints a single `"<size>\t<path>"` line. When the `--json` flag
//! is passed, [`JsonOutput`] is serialized to stdout instead and the warnings
//! collected during traversal travel inside the document rather than on
//! stderr.

use std::path::Path;

use serde::Serialize;

use crate::{
    config::TraversalPolicy, error::SizeWarning, format::format_size, traversal::SizeReport,
};

/// Top-level JSON output emitted when `--json` is active.
#[derive(Debug, Serialize)]
pub struct JsonOutput {
    /// The path argument exactly as given.
    pub path: String,

    /// Total size in bytes.
    pub size: u64,

    /// Size as it would be printed in plain mode (e.g. `"1.5KB"` or `"1536B"`).
    pub size_formatted: String,

    /// Whether subdirectories were descended into.
    pub recursive: bool,

    /// Whether hidden entries were counted.
    pub all: bool,

    /// Whether `size_formatted` uses human-readable units.
    pub human: bool,

    /// Non-fatal problems met during traversal.
    pub warnings: Vec<SizeWarning>,
}

impl JsonOutput {
    /// Build a `JsonOutput` from a finished size computation.
    #[must_use]
    pub fn from_report(
        path: &Path,
        report: &SizeReport,
        policy: TraversalPolicy,
        human: bool,
    ) -> Self {
        Self {
            path: path.display().to_string(),
            size: report.bytes,
            size_formatted: format_size(report.bytes, human),
            recursive: policy.recursive,
            all: policy.include_hidden,
            human,
            warnings: report.warnings.clone(),
        }
    }
}

/// The line printed on success in plain mode, without the trailing newline.
#[must_use]
pub fn size_line(path: &Path, bytes: u64, human: bool) -> String {
    format!("{}\t{}", format_size(bytes, human), path.display())
}
