//! Man page build engine.
//!
//! Converts a tree of markdown man-page sources into groff man pages by
//! piping each resolved document through an external converter (pandoc).
//! Per file: strip front matter, resolve `@include` directives, prepend a
//! pandoc title block, rewrite `[[...]]` reference macros, convert, write.
//!
//! The public API is organised into five layers:
//!
//! - **[`manifest`] / [`discover`]** — which sources to build and how
//! - **[`render`]** — pure text transformations (front matter, includes,
//!   macros, title block)
//! - **[`exec`] / [`convert`]** — external converter invocation
//! - **[`pipeline`]** — per-file jobs and the parallel batch driver
//! - **[`commands`]** — top-level orchestration behind the CLI
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod convert;
pub mod discover;
pub mod error;
pub mod exec;
pub mod logging;
pub mod manifest;
pub mod pipeline;
pub mod render;
pub mod vcs;
