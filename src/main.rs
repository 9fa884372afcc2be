//! # path-size
//!
//! A small CLI tool that prints the size of a file or directory.
//!
//! ## Features
//!
//! - Shallow (default) or recursive directory sizes
//! - Hidden entries skipped unless `--all` is given
//! - Symbolic links never counted or followed
//! - Raw byte counts or 1024-based human-readable units
//! - JSON output for scripting
//! - Persistent defaults via `~/.config/path-size/config.toml`
//!
//! ## Usage
//!
//! ```bash
//! # Size of the files directly inside a directory
//! path-size ./project
//!
//! # Whole tree, hidden entries included, human-readable
//! path-size -r -a -H ./project
//! ```

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use colored::Colorize;
use path_size::{
    config::FileConfig,
    error::SizeWarning,
    output::{JsonOutput, size_line},
    traversal::Traversal,
};
use std::process::exit;

/// Entry point for the path-size application.
///
/// This function handles all errors gracefully by calling [`inner_main`] and printing
/// any errors to stderr before exiting with a non-zero status code.
fn main() {
    if let Err(err) = inner_main() {
        eprintln!("Error: {err}");

        exit(1);
    }
}

/// Main application logic that can return errors.
///
/// Parses arguments, layers them over the config file, measures the path and
/// prints either the size line or a JSON document.
///
/// # Errors
///
/// Returns errors when the path cannot be stat'd or JSON serialization fails.
fn inner_main() -> Result<()> {
    let args = Cli::parse();

    let file_config = load_config();
    let json_mode = args.json(&file_config);
    let human = args.human(&file_config);
    let policy = args.policy(&file_config);

    let report = Traversal::new(policy).compute_size(args.path())?;

    if json_mode {
        let output = JsonOutput::from_report(args.path(), &report, policy, human);
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_warnings(&report.warnings);
    println!("{}", size_line(args.path(), report.bytes, human));

    Ok(())
}

/// Load the configuration file, falling back to defaults on failure.
fn load_config() -> FileConfig {
    match FileConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {e}", "Warning: Failed to load config file:".yellow());
            FileConfig::default()
        }
    }
}

/// Print traversal warnings to stderr.
fn print_warnings(warnings: &[SizeWarning]) {
    for warning in warnings {
        eprintln!("{}", format!("warning: {}", warning.message).yellow());
    }
}
