//! Structural Classifier: decides which bare closing braces survive.
//!
//! A single forward pass over the rewritten lines. The `inside_body` flag
//! flips the first time a line opens a test or hook block and never flips
//! back. Until then every lone `}` is vestigial wrapper noise and is dropped.
//!
//! A line opens a body when an opening rule fired on it (`@Test`, a hook
//! annotation, `main`), or when it already starts with a Playwright
//! `test(…, async` / `test.<hook>(async` callback, as in re-converted output.
//! A `test(` anywhere else on the line (`predicate.test(x)`, string literals)
//! is ordinary code.
//!
//! Braces are tracked on the *original* lines, because rewriting erases the
//! braces of neutralized declarations. Each `{` pushes a frame tagged with
//! what its line became:
//!
//! - `Wrapper`: the line was neutralized into a comment (class, package). Its
//!   lone `}` is dropped even after body entry.
//! - `Block`: the line opens a body with the same brace balance as the
//!   original (`main`). Its lone `}` is emitted as `});`.
//! - `Body`: anything else. Its `}` is kept verbatim once inside a body.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::line::SourceLine;
use super::rules::Rewritten;

static BODY_OPENER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"^test(?:\.(?:beforeEach|afterEach|beforeAll|afterAll))?\s*\(\s*(?:(?:"[^"]*"|'[^']*'|`[^`]*`)\s*,\s*)?async\b"#,
    )
    .expect("valid regex: body opener")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Frame {
    Wrapper,
    Block,
    Body,
}

/// Output of the classifier pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified {
    pub lines: Vec<String>,
    /// Final value of the body flag: some line declared a test, hook or
    /// `main`. The assembler treats it as "a test construct was detected".
    pub inside_body: bool,
}

/// True when `line` (already rewritten) starts a Playwright test or hook
/// callback.
pub fn is_body_opener(line: &SourceLine) -> bool {
    !line.is_comment() && BODY_OPENER.is_match(line.content())
}

/// Classify `rewritten` against the `originals` it was produced from.
///
/// Both slices are line-aligned; extra rewritten lines (there should be
/// none) are treated as having an empty original.
pub fn classify(originals: &[&str], rewritten: Vec<Rewritten>) -> Classified {
    let mut inside_body = false;
    let mut frames: Vec<Frame> = Vec::new();
    let mut lines = Vec::with_capacity(rewritten.len());
    let mut dropped = 0usize;

    for (i, rewrite) in rewritten.into_iter().enumerate() {
        let original = originals.get(i).copied().unwrap_or("");
        let line = SourceLine::new(rewrite.text);
        let original_delta = brace_delta(original);

        let opener = !line.is_comment() && (rewrite.opens_body || is_body_opener(&line));
        if opener {
            inside_body = true;
        }

        let kind = if line.is_comment() {
            Frame::Wrapper
        } else if opener && brace_delta(line.content()) == original_delta {
            Frame::Block
        } else {
            Frame::Body
        };
        let closed = track_braces(original, kind, &mut frames);

        if line.trimmed() != "}" {
            lines.push(line.into_text());
            continue;
        }

        match closed {
            _ if !inside_body => dropped += 1,
            Some(Frame::Wrapper) => dropped += 1,
            Some(Frame::Block) => lines.push(format!("{}}});", line.indent())),
            _ => lines.push(line.into_text()),
        }
    }

    debug!(
        lines = lines.len(),
        dropped,
        inside_body,
        "classified converted lines"
    );
    Classified { lines, inside_body }
}

/// Apply the brace events of `original` to the frame stack. Returns the
/// frame closed last on this line, if any.
fn track_braces(original: &str, kind: Frame, frames: &mut Vec<Frame>) -> Option<Frame> {
    let mut closed = None;
    for_each_brace(original, |open| {
        if open {
            frames.push(kind);
        } else {
            closed = frames.pop();
        }
    });
    closed
}

/// Net `{` minus `}` outside literals and line comments.
fn brace_delta(text: &str) -> i32 {
    let mut delta = 0;
    for_each_brace(text, |open| delta += if open { 1 } else { -1 });
    delta
}

fn for_each_brace(text: &str, mut f: impl FnMut(bool)) {
    let bytes = text.as_bytes();
    let mut quote: Option<u8> = None;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate() {
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
            b'"' | b'\'' | b'`' => quote = Some(b),
            b'/' if bytes.get(i + 1) == Some(&b'/') => return,
            b'{' => f(true),
            b'}' => f(false),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(originals: &[&str], rewritten: &[&str]) -> Classified {
        classify(
            originals,
            rewritten.iter().map(|s| Rewritten::from(s.to_string())).collect(),
        )
    }

    #[test]
    fn test_brace_delta_ignores_literals_and_comments() {
        assert_eq!(brace_delta("public class A {"), 1);
        assert_eq!(brace_delta(r#"log("{ not a brace }");"#), 0);
        assert_eq!(brace_delta("} else {"), 0);
        assert_eq!(brace_delta("x(); // {"), 0);
        assert_eq!(brace_delta(r"char c = '}';"), 0);
    }

    #[test]
    fn test_braces_dropped_before_body() {
        let out = run(&["{", "}", "  }"], &["{", "}", "  }"]);
        assert_eq!(out.lines, vec!["{"]);
        assert!(!out.inside_body);
    }

    #[test]
    fn test_wrapper_brace_removed_test_brace_kept() {
        let originals = [
            "public class LoginTest {",
            "    @Test",
            "    public void login() {",
            "        go();",
            "    }",
            "}",
        ];
        let rewritten = [
            "// Java Class: LoginTest",
            r#"    test("Converted Test", async ({ page }) => {"#,
            "    async function login(page) {",
            "        go();",
            "    }",
            "}",
        ];
        let out = run(&originals, &rewritten);
        assert!(out.inside_body);
        assert_eq!(
            out.lines,
            vec![
                "// Java Class: LoginTest",
                r#"    test("Converted Test", async ({ page }) => {"#,
                "    async function login(page) {",
                "        go();",
                "    }",
            ]
        );
    }

    #[test]
    fn test_main_block_closes_as_callback() {
        let originals = [
            "public class App {",
            "    public static void main(String[] args) {",
            "        if (ok) {",
            "            run();",
            "        }",
            "    }",
            "}",
        ];
        let rewritten = [
            "// Java Class: App",
            r#"    test("Main Execution Thread", async ({ page }) => {"#,
            "        if (ok) {",
            "            run();",
            "        }",
            "    }",
            "}",
        ];
        let out = run(&originals, &rewritten);
        assert_eq!(out.lines[4], "        }");
        assert_eq!(out.lines[5], "    });");
        assert_eq!(out.lines.len(), 6);
    }

    #[test]
    fn test_flag_is_monotonic() {
        let originals = [
            "@Test",
            "public void a() {",
            "}",
            "class Helper {",
            "}",
        ];
        let rewritten = [
            r#"test("Converted Test", async ({ page }) => {"#,
            "async function a(page) {",
            "}",
            "class Helper {",
            "}",
        ];
        let out = run(&originals, &rewritten);
        // The second `}` closes a body frame after entry and is kept.
        assert_eq!(out.lines.iter().filter(|l| l.as_str() == "}").count(), 2);
        assert!(out.inside_body);
    }

    #[test]
    fn test_commented_opener_does_not_enter_body() {
        let line = SourceLine::new(r#"// test("x", async () => {"#);
        assert!(!is_body_opener(&line));
        assert!(is_body_opener(&SourceLine::new(
            "  test.beforeEach(async ({ page }) => {"
        )));
        assert!(!is_body_opener(&SourceLine::new("latest(x);")));
    }

    #[test]
    fn test_opener_must_lead_the_line() {
        for text in [
            "if (isValid.test(value)) {",
            "Predicate.test(x);",
            r#"console.log("running test(1)");"#,
            r#"log("test('x', async () => {");"#,
            "test(value);",
        ] {
            assert!(!is_body_opener(&SourceLine::new(text)), "{}", text);
        }
        assert!(is_body_opener(&SourceLine::new(
            "    test('Automated Conversion', async ({ page }) => {"
        )));
    }

    #[test]
    fn test_predicate_call_is_plain_body_code() {
        let originals = ["if (isValid.test(value)) {", "    go();", "}"];
        let out = run(&originals, &originals);
        assert!(!out.inside_body);
        assert_eq!(out.lines, vec!["if (isValid.test(value)) {", "    go();"]);
    }

    #[test]
    fn test_fired_opening_rule_enters_body() {
        let originals = ["@Test", "x();", "}"];
        let rewritten = vec![
            Rewritten {
                text: "// opened elsewhere".to_string(),
                opens_body: true,
            },
            Rewritten::from("x();".to_string()),
            Rewritten::from("}".to_string()),
        ];
        // A line that ended up as a comment never opens a body.
        assert!(!classify(&originals, rewritten).inside_body);

        let rewritten = vec![
            Rewritten {
                text: "custom_test_opener(() => {".to_string(),
                opens_body: true,
            },
            Rewritten::from("x();".to_string()),
            Rewritten::from("}".to_string()),
        ];
        let out = classify(&originals, rewritten);
        assert!(out.inside_body);
        assert_eq!(out.lines.last().map(String::as_str), Some("}"));
    }
}
