//! Command-line interface definition and argument parsing.
//!
//! This module defines all command-line arguments and options using the
//! [clap](https://docs.rs/clap/) library and turns them into the values the
//! library expects.
//!
//! Helper methods on [`Cli`] accept a [`FileConfig`] reference so that config-file
//! values act as defaults that CLI arguments can override (layered config).

use std::path::{Path, PathBuf};

use clap::Parser;

use path_size::config::{FileConfig, TraversalPolicy};

/// Main command-line interface structure.
///
/// Exactly one path is required; running without it is a usage error
/// reported by clap.
#[derive(Parser, Debug)]
#[command(name = "path-size")]
#[command(about = "Print the size of a file or directory")]
#[command(version)]
#[command(author)]
pub struct Cli {
    /// File or directory to measure
    ///
    /// Symbolic links are never followed: a link given here is measured as the
    /// link itself, and links found inside directories are not counted.
    path: PathBuf,

    /// Recursive size of directories
    ///
    /// Without this flag only the files directly inside a directory are
    /// counted; nested subdirectories contribute nothing.
    #[arg(short = 'r', long)]
    recursive: bool,

    /// Include hidden files and directories
    ///
    /// Entries whose name starts with `.` are skipped unless this flag is set,
    /// including the path argument itself.
    #[arg(short = 'a', long)]
    all: bool,

    /// Human-readable sizes (1024-based: KB, MB, GB, ...)
    #[arg(short = 'H', long)]
    human: bool,

    /// Output the result as a single JSON object for scripting/piping
    ///
    /// Warnings about unreadable directories are included in the document
    /// instead of being printed to stderr.
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// The path argument exactly as given.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build the traversal policy from CLI flags and config file.
    ///
    /// For each flag, the CLI flag (if set) takes priority, then the config
    /// file value, then `false`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use clap::Parser;
    /// # use path_size::config::FileConfig;
    /// # mod cli { include!("cli.rs"); }
    /// # use cli::Cli;
    /// let args = Cli::parse_from(&["path-size", "-r", "some/dir"]);
    /// let policy = args.policy(&FileConfig::default());
    /// assert!(policy.recursive);
    /// assert!(!policy.include_hidden);
    /// ```
    #[must_use]
    pub fn policy(&self, config: &FileConfig) -> TraversalPolicy {
        TraversalPolicy::new(
            self.recursive || config.traversal.recursive.unwrap_or(false),
            self.all || config.traversal.all.unwrap_or(false),
        )
    }

    /// Whether sizes are printed in human-readable units.
    #[must_use]
    pub fn human(&self, config: &FileConfig) -> bool {
        self.human || config.output.human.unwrap_or(false)
    }

    /// Whether `--json` structured output mode is enabled.
    #[must_use]
    pub fn json(&self, config: &FileConfig) -> bool {
        self.json || config.output.json.unwrap_or(false)
    }
}
