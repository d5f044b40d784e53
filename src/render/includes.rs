//! Recursive resolution of `<!-- @include: path -->` directives.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::front_matter;
use crate::error::RenderError;

/// Upper bound on include nesting. A chain deeper than this is assumed to
/// be cyclic and fails the file instead of recursing until exhaustion.
pub const MAX_INCLUDE_DEPTH: usize = 32;

#[allow(clippy::expect_used)]
static INCLUDE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<!--\s*@include:\s*(.*?)\s*-->").expect("include pattern is valid")
});

/// Replace every include directive in `body` with the resolved body of the
/// referenced file.
///
/// Targets are read relative to the directory containing `source` (the file
/// `body` was loaded from), so a documentation tree can be relocated without
/// breaking its includes. Resolution is depth-first and eager: an included
/// file's own directives are fully resolved (its front matter stripped)
/// before its text is spliced into the parent. Directives with an empty
/// payload are passed through verbatim.
///
/// # Errors
///
/// Returns an error if an include target cannot be read, or if the include
/// chain exceeds [`MAX_INCLUDE_DEPTH`].
pub fn resolve(body: &str, source: &Path) -> Result<String, RenderError> {
    resolve_at(body, source, 0)
}

fn resolve_at(body: &str, source: &Path, depth: usize) -> Result<String, RenderError> {
    if depth >= MAX_INCLUDE_DEPTH {
        return Err(RenderError::IncludeDepth {
            path: source.to_path_buf(),
            limit: MAX_INCLUDE_DEPTH,
        });
    }

    let dir = source.parent().unwrap_or_else(|| Path::new(""));
    let mut out = String::with_capacity(body.len());
    let mut last = 0;

    for caps in INCLUDE_RE.captures_iter(body) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(body.get(last..whole.start()).unwrap_or_default());
        last = whole.end();

        let payload = caps.get(1).map_or("", |m| m.as_str());
        if payload.is_empty() {
            out.push_str(whole.as_str());
            continue;
        }

        let target = dir.join(payload);
        debug!("include: {}", target.display());
        let raw = std::fs::read_to_string(&target).map_err(|e| RenderError::IncludeRead {
            path: target.clone(),
            source: e,
        })?;
        let resolved = resolve_at(front_matter::strip(&raw), &target, depth + 1)?;
        out.push_str(&resolved);
    }

    out.push_str(body.get(last..).unwrap_or_default());
    Ok(out)
}
