//! Manifest file parsing: which sources to build and how to convert them.

use std::path::Path;

use serde::Deserialize;

use crate::error::ManifestError;

/// Default manifest file name, looked up at the documentation root.
pub const FILE_NAME: &str = "mangen.toml";

/// Build manifest: input patterns, converter invocation, title label.
///
/// Every field has a default, so the tool runs without a manifest present:
///
/// ```
/// use mangen_cli::manifest::Manifest;
///
/// let m = Manifest::default();
/// assert_eq!(m.patterns, vec!["man/*.md".to_string()]);
/// assert_eq!(m.converter, "pandoc");
/// assert_eq!(m.label, "Dovecot");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Glob patterns naming the markdown sources, relative to the root.
    pub patterns: Vec<String>,
    /// Converter program invoked per file.
    pub converter: String,
    /// Arguments passed to the converter (markdown in, standalone man out).
    pub args: Vec<String>,
    /// Project label placed after the version token in the title block.
    pub label: String,
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            patterns: vec!["man/*.md".to_string()],
            converter: "pandoc".to_string(),
            args: ["-f", "markdown", "-t", "man", "-s"]
                .map(String::from)
                .to_vec(),
            label: "Dovecot".to_string(),
        }
    }
}

/// Load the manifest for a documentation root.
///
/// With no `override_path`, reads `<root>/mangen.toml` if it exists and
/// falls back to [`Manifest::default`] if it does not. An explicit
/// `override_path` must exist; a missing file is then an error.
///
/// # Errors
///
/// Returns an error if the manifest file cannot be read or parsed.
pub fn load(root: &Path, override_path: Option<&Path>) -> Result<Manifest, ManifestError> {
    let path = override_path.map_or_else(|| root.join(FILE_NAME), Path::to_path_buf);
    if override_path.is_none() && !path.exists() {
        return Ok(Manifest::default());
    }

    let content = std::fs::read_to_string(&path).map_err(|source| ManifestError::Io {
        path: path.clone(),
        source,
    })?;

    toml::from_str(&content).map_err(|e| ManifestError::Parse {
        path,
        message: e.to_string(),
    })
}
