//! Input discovery: expand manifest glob patterns into concrete file paths.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ManifestError;

/// Expand `patterns` against the filesystem, relative to `root`.
///
/// Returns the union of all matches, restricted to regular files, sorted
/// and deduplicated so the processing order is deterministic. Directories
/// that cannot be read while walking a pattern are skipped with a debug
/// line rather than failing the run.
///
/// # Errors
///
/// Returns an error if a pattern itself is not valid glob syntax.
pub fn expand_patterns(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>, ManifestError> {
    let mut files = Vec::new();

    for pattern in patterns {
        let full = root.join(pattern);
        let entries =
            glob::glob(&full.to_string_lossy()).map_err(|e| ManifestError::Pattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;

        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(path) => debug!("skipping non-file match: {}", path.display()),
                Err(e) => debug!("skipping unreadable path: {e}"),
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}
