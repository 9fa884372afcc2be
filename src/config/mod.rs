//! Configuration types for the path-size tool.
//!
//! - [`TraversalPolicy`] - which entries count toward a size
//! - [`FileConfig`] - persistent defaults read from `config.toml`

pub mod file;
pub mod policy;

pub use file::FileConfig;
pub use policy::{TraversalPolicy, is_hidden};
