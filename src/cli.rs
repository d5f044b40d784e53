//! Command line argument surface.

use std::path::PathBuf;

use clap::Parser;

/// Top-level CLI entry point for the man page build engine.
#[derive(Parser, Debug)]
#[command(
    name = "mangen",
    about = "Generates man pages from markdown source.\n\nRequires \"pandoc\" to be installed on the system!",
    version = option_env!("MANGEN_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
)]
pub struct Cli {
    /// Path to output man pages
    pub output: PathBuf,

    /// Print debug output
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Override the documentation root directory
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Path to the manifest file (default: <root>/mangen.toml)
    #[arg(long)]
    pub manifest: Option<PathBuf>,

    /// Override the converter program named in the manifest
    #[arg(long)]
    pub converter: Option<String>,

    /// Disable parallel conversion (parallel is enabled by default)
    #[arg(long = "no-parallel", action = clap::ArgAction::SetFalse)]
    pub parallel: bool,
}
