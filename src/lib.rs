//! # path-size
//!
//! Library behind the `path-size` command: computes the logical on-disk size
//! of a file or directory and formats it for display.
//!
//! ## Main Parts
//!
//! - [`traversal`] - walks a path under a [`TraversalPolicy`] and sums byte lengths
//! - [`format`] - turns a byte count into `"1536B"` or `"1.5KB"`
//! - [`metadata`] - the filesystem access the traversal is built on
//! - [`config`] - traversal policy and the optional `config.toml`
//! - [`output`] - plain and JSON rendering of a result
//! - [`error`] - fatal errors and non-fatal warnings

pub mod config;
pub mod error;
pub mod format;
pub mod metadata;
pub mod output;
pub mod traversal;

pub use config::TraversalPolicy;
pub use error::{SizeError, SizeWarning, WarningKind};
pub use format::format_size;
pub use traversal::{SizeReport, Traversal, compute_size};
