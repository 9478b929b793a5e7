//! Post-Processor: await injection and comment punctuation cleanup.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

use super::line::SourceLine;

/// Interaction primitives that must be awaited.
pub const ACTIONS: &[&str] = &[
    "page.locator",
    "page.goto",
    "page.title",
    "page.url",
    "page.innerText",
    "page.isVisible",
];

pub const AWAIT_MARKER: &str = "await ";

static DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:const|let|var)\s").expect("valid regex: declaration"));

static AWAITED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^await\b").expect("valid regex: await"));

/// Run both line transforms over the classified body.
pub fn postprocess(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|text| {
            let line = SourceLine::new(text);
            rewrite(&line).unwrap_or_else(|| line.into_text())
        })
        .collect()
}

fn rewrite(line: &SourceLine) -> Option<String> {
    let result = if line.is_comment() {
        strip_comment_terminator(line)
    } else {
        inject_await(line)
    };
    match result {
        Cow::Owned(text) => Some(text),
        Cow::Borrowed(_) => None,
    }
}

/// Prefix `await ` after the indentation of a line that calls an action
/// primitive and is not already awaited, a comment or a declaration.
pub fn inject_await(line: &SourceLine) -> Cow<'_, str> {
    let content = line.content();
    let needs_await = ACTIONS.iter().any(|action| content.contains(action))
        && !line.is_comment()
        && !AWAITED.is_match(content)
        && !DECLARATION.is_match(content);

    if needs_await {
        Cow::Owned(format!("{}{}{}", line.indent(), AWAIT_MARKER, content))
    } else {
        Cow::Borrowed(line.text())
    }
}

/// Remove one trailing `;` from a comment line.
pub fn strip_comment_terminator(line: &SourceLine) -> Cow<'_, str> {
    let text = line.text();
    let body = text.trim_end();
    match body.strip_suffix(';') {
        Some(kept) if line.is_comment() => Cow::Owned(format!("{}{}", kept, &text[body.len()..])),
        _ => Cow::Borrowed(text),
    }
}
