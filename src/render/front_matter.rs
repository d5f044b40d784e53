//! Front-matter separation: the YAML metadata header is discarded, only
//! the document body flows into the pipeline.

/// Return the body of `text`, with any leading `---`-fenced metadata block
/// removed.
///
/// The header must start at the first byte of the document. A document with
/// an opening fence but no closing fence is treated as having no front
/// matter at all; the input is returned unchanged. The newline after the
/// closing fence belongs to the fence, not the body.
#[must_use]
pub fn strip(text: &str) -> &str {
    let Some(after_open) = text
        .strip_prefix("---\n")
        .or_else(|| text.strip_prefix("---\r\n"))
    else {
        return text;
    };

    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        let end = offset + line.len();
        if line.trim_end_matches(['\r', '\n']) == "---" {
            return after_open.get(end..).unwrap_or_default();
        }
        offset = end;
    }

    // Unclosed header: no front matter present.
    text
}
