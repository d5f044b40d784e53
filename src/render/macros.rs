//! One-pass rewrite of `[[...]]` reference macros into display text.

use std::sync::LazyLock;

use regex::Regex;

#[allow(clippy::expect_used)]
static MACRO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[(.*?)\]\]").expect("macro pattern is valid"));

/// Macro kinds recognized by the rewriter.
///
/// Anything that is not an exact (case-sensitive) known tag is `Other`,
/// which renders as the raw payload text, so unknown macros degrade to
/// plain text instead of vanishing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MacroKind {
    Man,
    Setting,
    Other,
}

impl MacroKind {
    fn from_tag(tag: &str) -> Self {
        match tag {
            "man" => Self::Man,
            "setting" => Self::Setting,
            _ => Self::Other,
        }
    }
}

/// Replace every `[[...]]` macro in `body` with its rendered inline text.
///
/// A single left-to-right pass; inserted text is not re-scanned. The
/// payload is split on `,` with each part trimmed. The first part selects
/// the kind:
///
/// - `man`: `<part1>(<part3>)`, defaulting the section to `1` when part 3
///   is absent or empty. Part 2 is consumed by position but not rendered.
/// - `setting`: part 1 wrapped in backticks.
/// - anything else: the raw payload, unchanged.
///
/// Empty payloads (`[[]]`) pass through verbatim. Missing positional
/// arguments render as empty segments; no payload is ever an error.
#[must_use]
pub fn rewrite(body: &str) -> String {
    MACRO_RE
        .replace_all(body, |caps: &regex::Captures<'_>| {
            let payload = caps.get(1).map_or("", |m| m.as_str());
            if payload.is_empty() {
                return caps
                    .get(0)
                    .map_or_else(String::new, |m| m.as_str().to_string());
            }
            render(payload)
        })
        .into_owned()
}

fn render(payload: &str) -> String {
    let parts: Vec<&str> = payload.split(',').map(str::trim).collect();
    let tag = parts.first().copied().unwrap_or_default();
    match MacroKind::from_tag(tag) {
        MacroKind::Man => {
            let name = parts.get(1).copied().unwrap_or_default();
            let section = parts
                .get(3)
                .copied()
                .filter(|s| !s.is_empty())
                .unwrap_or("1");
            format!("{name}({section})")
        }
        MacroKind::Setting => {
            let name = parts.get(1).copied().unwrap_or_default();
            format!("`{name}`")
        }
        MacroKind::Other => payload.to_string(),
    }
}
