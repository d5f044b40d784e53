//! Pandoc title-block generation.
//!
//! Every document handed to the converter must begin with a pandoc title
//! block (<https://pandoc.org/MANUAL.html#extension-pandoc_title_block>)
//! so the generated page carries the right name, section, version and date.

/// Build the title block for a source file.
///
/// `file_name` is the input's base name, expected to look like
/// `<program>.<section>.md`; the first two `.`-separated segments become
/// the page name and section. Base names with fewer segments are not
/// rejected; the missing segments render as empty strings, matching the
/// permissive behavior of the rest of the pipeline.
///
/// The returned block ends with a blank line so the body can be appended
/// directly.
#[must_use]
pub fn title_block(file_name: &str, version: &str, date: &str, label: &str) -> String {
    let mut segments = file_name.split('.');
    let name = segments.next().unwrap_or_default();
    let section = segments.next().unwrap_or_default();
    format!("% {name}({section}) {version} | {label}\n%\n% {date}\n\n")
}

/// Format today's local date the way the title block expects it.
///
/// Computed once per run and shared by all files.
#[must_use]
pub fn run_date() -> String {
    chrono::Local::now().format("%Y/%m/%d").to_string()
}
