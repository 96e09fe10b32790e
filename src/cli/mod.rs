//! CLI argument parsing for profile-merge.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The merge pipeline itself lives in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

/// Merge override directives into a sectioned build profile.
///
/// Reads PROFILE, applies each OVERRIDE in order, and rewrites PROFILE with
/// the result. An override is `section:key=value` to set a value, or
/// `section:line` to append a bare line such as a package reference.
#[derive(Parser, Debug)]
#[command(name = "profile-merge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Profile file to merge into (rewritten in place unless --output is given).
    pub profile: Option<PathBuf>,

    /// Override directives: `section:key=value` or `section:line`.
    pub overrides: Vec<String>,

    /// Write the merged profile here instead of over PROFILE.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the merged profile to stdout without writing anything.
    #[arg(long)]
    pub dry_run: bool,

    /// With --dry-run, print the merged profile as JSON.
    #[arg(long, requires = "dry_run")]
    pub json: bool,

    /// YAML merge configuration (extra overrides, write mode, backup).
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep a copy of the original profile at `<PROFILE>.bak`.
    #[arg(long)]
    pub backup: bool,

    /// Suppress status messages on stderr.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
