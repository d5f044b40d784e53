//! Command: generate man pages from markdown sources.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context as _, Result};
use tracing::{debug, error, info, warn};

use crate::cli::Cli;
use crate::convert::Converter;
use crate::discover;
use crate::exec::SystemExecutor;
use crate::logging::stage;
use crate::manifest;
use crate::pipeline::{self, RunContext};
use crate::render::title;
use crate::vcs;

/// Run the generate command.
///
/// # Errors
///
/// Returns an error if the manifest cannot be loaded, the converter is not
/// installed, version-control metadata is unavailable, the output directory
/// cannot be created, or any file fails to convert.
pub fn run(args: &Cli) -> Result<()> {
    let root = resolve_root(args)?;
    debug!("documentation root: {}", root.display());

    stage("Loading manifest");
    let manifest = manifest::load(&root, args.manifest.as_deref())?;
    let program = args
        .converter
        .clone()
        .unwrap_or_else(|| manifest.converter.clone());
    info!(
        "{} source pattern(s), converter '{program}'",
        manifest.patterns.len()
    );

    stage("Discovering sources");
    let files = discover::expand_patterns(&root, &manifest.patterns)?;
    if files.is_empty() {
        warn!("no input files matched the manifest patterns");
        return Ok(());
    }
    info!("{} file(s)", files.len());

    let converter = Converter::new(program, &manifest.args, Arc::new(SystemExecutor));
    if !converter.is_available() {
        anyhow::bail!("converter '{}' not found on PATH", converter.program());
    }

    stage("Resolving version");
    let version = vcs::head_short_id(&root)?;
    info!("version {version}");

    // Create the output directory before any conversion job runs.
    std::fs::create_dir_all(&args.output).with_context(|| {
        format!(
            "failed to create output directory {}",
            args.output.display()
        )
    })?;

    let ctx = RunContext {
        version,
        date: title::run_date(),
        label: manifest.label,
        out_dir: args.output.clone(),
        converter,
    };

    stage("Generating man pages");
    let outcomes = pipeline::run_all(&ctx, &files, args.parallel);

    let mut converted = 0usize;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(_) => converted += 1,
            Err(e) => error!("{}: {e:#}", outcome.input.display()),
        }
    }
    info!("converted {converted} of {} file(s)", outcomes.len());

    let failed = outcomes.len() - converted;
    if failed > 0 {
        anyhow::bail!("{failed} of {} file(s) failed", outcomes.len());
    }
    Ok(())
}

/// Resolve the documentation root directory from CLI arguments, the
/// `MANGEN_ROOT` environment variable, or the current directory.
///
/// # Errors
///
/// Returns an error if no override is given and the current directory
/// cannot be determined.
pub fn resolve_root(args: &Cli) -> Result<PathBuf> {
    if let Some(ref root) = args.root {
        return Ok(root.clone());
    }
    if let Ok(root) = std::env::var("MANGEN_ROOT") {
        return Ok(PathBuf::from(root));
    }
    Ok(std::env::current_dir()?)
}
