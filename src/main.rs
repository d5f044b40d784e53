//! `mangen` binary entry point.

use anyhow::Result;
use clap::Parser as _;

use mangen_cli::{cli, commands, logging};

fn main() -> Result<()> {
    let _ = enable_ansi_support::enable_ansi_support();
    let args = cli::Cli::parse();
    logging::init_subscriber(args.debug);

    commands::generate::run(&args)
}
