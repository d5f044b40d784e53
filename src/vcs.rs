//! Version-control metadata: the short commit id embedded in title blocks.

use std::path::Path;

use anyhow::{Context as _, Result, anyhow};

/// Return the abbreviated object id of `HEAD` for the repository containing
/// `root`, discovered by walking upward from `root`.
///
/// Computed once per run; the token marks provenance in every generated
/// page. There is no fallback: a missing repository or unborn `HEAD`
/// aborts the run before any file is processed.
///
/// # Errors
///
/// Returns an error if no repository is found at or above `root`, or if
/// `HEAD` cannot be resolved to a commit.
pub fn head_short_id(root: &Path) -> Result<String> {
    let repo = git2::Repository::discover(root)
        .with_context(|| format!("no git repository found at or above {}", root.display()))?;
    let head = repo
        .revparse_single("HEAD")
        .context("failed to resolve HEAD")?;
    let short = head
        .short_id()
        .context("failed to abbreviate HEAD object id")?;
    short
        .as_str()
        .map(String::from)
        .ok_or_else(|| anyhow!("abbreviated HEAD id is not valid UTF-8"))
}
