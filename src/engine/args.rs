//! Call-argument scanning and `${…}` templates for call rules.
//!
//! Template placeholders:
//! - `${N}`   argument N (1-based), trimmed; empty if absent
//! - `${*}`   the whole argument list, verbatim
//! - `${N..}` argument N and every later one, each preceded by `, `

use crate::types::{Error, Result};

/// Arguments of one call found on a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallArgs<'a> {
    /// Text between the parentheses, verbatim.
    pub raw: &'a str,
    /// Top-level comma-separated arguments, untrimmed.
    pub args: Vec<&'a str>,
    /// Byte offset just past the closing parenthesis.
    pub end: usize,
}

/// Scan the argument list whose opening parenthesis sits at byte `open`.
///
/// Nested brackets and string/char literals are skipped when splitting on
/// commas. Returns `None` when the list is not closed on this line.
pub fn scan_call(line: &str, open: usize) -> Option<CallArgs<'_>> {
    let bytes = line.as_bytes();
    if bytes.get(open) != Some(&b'(') {
        return None;
    }

    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut escaped = false;
    let mut args = Vec::new();
    let mut arg_start = open + 1;

    for (i, &b) in bytes.iter().enumerate().skip(open + 1) {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == q {
                quote = None;
            }
            continue;
        }

        match b {
            b'"' | b'\'' => quote = Some(b),
            b'(' | b'[' | b'{' => depth += 1,
            b')' if depth == 0 => {
                let raw = &line[open + 1..i];
                if !raw.trim().is_empty() || !args.is_empty() {
                    args.push(&line[arg_start..i]);
                }
                return Some(CallArgs {
                    raw,
                    args,
                    end: i + 1,
                });
            }
            b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            b',' if depth == 0 => {
                args.push(&line[arg_start..i]);
                arg_start = i + 1;
            }
            _ => {}
        }
    }

    None
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Arg(usize),
    All,
    From(usize),
}

/// Replacement template for call rules, parsed once at table construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallTemplate {
    segments: Vec<Segment>,
}

impl CallTemplate {
    pub fn parse(template: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(start) = rest.find("${") {
            literal.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let close = after.find('}').ok_or_else(|| {
                Error::invalid_rule(format!("unterminated placeholder in '{}'", template))
            })?;
            let placeholder = &after[..close];
            let segment = parse_placeholder(placeholder).ok_or_else(|| {
                Error::invalid_rule(format!(
                    "bad placeholder '${{{}}}' in '{}'",
                    placeholder, template
                ))
            })?;

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(segment);
            rest = &after[close + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Self { segments })
    }

    pub fn expand(&self, call: &CallArgs<'_>) -> String {
        let mut out = String::with_capacity(call.raw.len() + 16);
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::All => out.push_str(call.raw),
                Segment::Arg(n) => {
                    if let Some(arg) = call.args.get(n - 1) {
                        out.push_str(arg.trim());
                    }
                }
                Segment::From(n) => {
                    for arg in call.args.iter().skip(n - 1) {
                        out.push_str(", ");
                        out.push_str(arg.trim());
                    }
                }
            }
        }
        out
    }
}

fn parse_placeholder(name: &str) -> Option<Segment> {
    if name == "*" {
        return Some(Segment::All);
    }
    if let Some(n) = name.strip_suffix("..") {
        return n.parse::<usize>().ok().filter(|&n| n >= 1).map(Segment::From);
    }
    name.parse::<usize>().ok().filter(|&n| n >= 1).map(Segment::Arg)
}
