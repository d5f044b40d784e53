//! Domain-specific error types for the man page build engine.
//!
//! Library modules return typed errors ([`ManifestError`], [`RenderError`],
//! [`ConvertError`]) while the command layer at the CLI boundary converts
//! them to [`anyhow::Error`] via the standard `?` operator.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that arise from manifest loading and input discovery.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// An I/O error occurred while reading the manifest file.
    #[error("IO error reading manifest {}: {source}", path.display())]
    Io {
        /// Path to the manifest that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The manifest file contains a syntax error that prevents parsing.
    #[error("Invalid manifest {}: {message}", path.display())]
    Parse {
        /// Path to the manifest that failed to parse.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },

    /// A glob pattern in the manifest is not valid.
    #[error("Invalid glob pattern '{pattern}': {message}")]
    Pattern {
        /// The offending pattern, as written in the manifest.
        pattern: String,
        /// Parser diagnostic.
        message: String,
    },
}

/// Errors that arise while resolving a source document.
#[derive(Error, Debug)]
pub enum RenderError {
    /// An include target could not be read from disk.
    #[error("Failed to read include {}: {source}", path.display())]
    IncludeRead {
        /// Path of the file named by the include directive.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The include chain exceeded the recursion bound (a cyclic or
    /// pathologically deep include graph).
    #[error("Include depth limit ({limit}) exceeded at {}", path.display())]
    IncludeDepth {
        /// File whose includes were being resolved when the bound was hit.
        path: PathBuf,
        /// The configured recursion bound.
        limit: usize,
    },
}

/// Errors that arise from invoking the external converter.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The converter process could not be spawned or driven.
    #[error("Failed to run converter '{program}': {message}")]
    Spawn {
        /// Converter program name.
        program: String,
        /// Underlying execution failure.
        message: String,
    },

    /// The converter ran but exited non-zero.
    #[error("Converter '{program}' failed (exit {code:?}): {stderr}")]
    Failed {
        /// Converter program name.
        program: String,
        /// Exit code, if the process was not killed by a signal.
        code: Option<i32>,
        /// Trimmed stderr output from the converter.
        stderr: String,
    },
}
