//! Assembler: header, optional wrapper block, final close.

use super::dialect::{Dialect, MODULE_HEADER, REQUIRE_HEADER};

/// Opener of the block synthesized around documents with no test construct.
pub const WRAPPER_OPEN: &str = "test('Automated Conversion', async ({ page }) => {";

/// Terminator of a callback-style block.
pub const BLOCK_CLOSE: &str = "});";

/// Join the processed body under the dialect header.
///
/// With `detected_test_construct` the body is kept as is and closed with
/// `});` unless it already ends that way. Without it the whole body goes
/// into one synthesized test block.
pub fn assemble(lines: &[String], detected_test_construct: bool, dialect: Dialect) -> String {
    let mut body = lines.join("\n");

    if detected_test_construct {
        if !body.trim().ends_with(BLOCK_CLOSE) {
            body.push('\n');
            body.push_str(BLOCK_CLOSE);
        }
    } else {
        body = format!("{}\n{}\n{}", WRAPPER_OPEN, body, BLOCK_CLOSE);
    }

    format!("{}\n\n{}", dialect.header(), body)
}

/// Drop Playwright headers (and the blank line after each) from the top of
/// a document, so converting converted output does not stack headers.
pub fn strip_header<'a, 'b>(lines: &'b [&'a str]) -> &'b [&'a str] {
    let mut rest = lines;
    while let Some((first, tail)) = rest.split_first() {
        let first = first.trim();
        if first != MODULE_HEADER && first != REQUIRE_HEADER {
            break;
        }
        rest = match tail.split_first() {
            Some((blank, after)) if blank.trim().is_empty() => after,
            _ => tail,
        };
    }
    rest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_wrapper_synthesized_without_construct() {
        let out = assemble(&owned(&["await page.goto(url);"]), false, Dialect::Module);
        assert_eq!(
            out,
            "import { test, expect } from '@playwright/test';\n\n\
             test('Automated Conversion', async ({ page }) => {\n\
             await page.goto(url);\n\
             });"
        );
        assert_eq!(out.matches(WRAPPER_OPEN).count(), 1);
    }

    #[test]
    fn test_detected_body_is_closed_once() {
        let open = owned(&[r#"test("Converted Test", async ({ page }) => {"#, "  x();"]);
        let out = assemble(&open, true, Dialect::Require);
        assert!(out.starts_with(REQUIRE_HEADER));
        assert!(out.ends_with("  x();\n});"));
        assert!(!out.contains(WRAPPER_OPEN));

        let closed = owned(&[r#"test("Main Execution Thread", async ({ page }) => {"#, "});", ""]);
        let out = assemble(&closed, true, Dialect::Module);
        assert_eq!(out.matches(BLOCK_CLOSE).count(), 1);
    }

    #[test]
    fn test_strip_header() {
        let lines = [MODULE_HEADER, "", "test('x', async () => {"];
        assert_eq!(strip_header(&lines), &["test('x', async () => {"]);

        let lines = [REQUIRE_HEADER, "foo();"];
        assert_eq!(strip_header(&lines), &["foo();"]);

        let lines = ["package a;", MODULE_HEADER];
        assert_eq!(strip_header(&lines).len(), 2);
    }
}
