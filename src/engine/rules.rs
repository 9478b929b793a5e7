//! Rule Table: ordered line rewrites.
//!
//! Every rule is attempted on every line, first to last. A rule replaces all
//! of its non-overlapping matches in one application and hands the result to
//! the next rule, so rules compose rather than branch. Nothing here can fail
//! at conversion time: a line no rule matches comes back unchanged.

use regex::Regex;
use std::borrow::Cow;

use super::args::{scan_call, CallTemplate};
use super::mappings::STANDARD_RULES;
use crate::types::{Error, Result};

/// How a rule locates the text it rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Regular expression; template refers to capture groups as `${N}`.
    Pattern,
    /// Callee expression followed by a parenthesised argument list; template
    /// refers to arguments (see [`super::args`]).
    Call,
}

/// Declarative description of one rule. The built-in table is a `const`
/// slice of these; extra mappings are added the same way.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    pub name: &'static str,
    pub kind: RuleKind,
    pub pattern: &'static str,
    pub template: &'static str,
    /// Literal that must follow a call's closing parenthesis and is consumed
    /// with it (e.g. the `)` that closes an enclosing `findElement(`).
    pub suffix: &'static str,
    /// A match means the source declares a test, hook or `main` entry point.
    pub opens_body: bool,
}

impl RuleSpec {
    pub const fn pattern(name: &'static str, pattern: &'static str, template: &'static str) -> Self {
        Self {
            name,
            kind: RuleKind::Pattern,
            pattern,
            template,
            suffix: "",
            opens_body: false,
        }
    }

    pub const fn call(name: &'static str, callee: &'static str, template: &'static str) -> Self {
        Self {
            name,
            kind: RuleKind::Call,
            pattern: callee,
            template,
            suffix: "",
            opens_body: false,
        }
    }

    /// Call rule whose argument list is followed by one more `)`.
    pub const fn call_closed(
        name: &'static str,
        callee: &'static str,
        template: &'static str,
    ) -> Self {
        Self {
            name,
            kind: RuleKind::Call,
            pattern: callee,
            template,
            suffix: ")",
            opens_body: false,
        }
    }

    /// Mark the rule as translating a test, hook or `main` declaration.
    pub const fn opening(self) -> Self {
        Self {
            opens_body: true,
            ..self
        }
    }

    pub fn compile(&self) -> Result<RewriteRule> {
        let regex = Regex::new(self.pattern)
            .map_err(|e| Error::invalid_rule(format!("{}: {}", self.name, e)))?;
        let matcher = match self.kind {
            RuleKind::Pattern => Matcher::Pattern {
                regex,
                template: self.template.to_string(),
            },
            RuleKind::Call => Matcher::Call {
                callee: regex,
                suffix: self.suffix,
                template: CallTemplate::parse(self.template)
                    .map_err(|e| Error::invalid_rule(format!("{}: {}", self.name, e)))?,
            },
        };
        Ok(RewriteRule {
            name: self.name,
            opens_body: self.opens_body,
            matcher,
        })
    }
}

#[derive(Debug, Clone)]
enum Matcher {
    Pattern {
        regex: Regex,
        template: String,
    },
    Call {
        callee: Regex,
        suffix: &'static str,
        template: CallTemplate,
    },
}

/// A compiled (matcher, replacement-template) pair.
#[derive(Debug, Clone)]
pub struct RewriteRule {
    name: &'static str,
    opens_body: bool,
    matcher: Matcher,
}

impl RewriteRule {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rewrite every match on `line`. Borrowed result means no match.
    pub fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        match &self.matcher {
            Matcher::Pattern { regex, template } => regex.replace_all(line, template.as_str()),
            Matcher::Call {
                callee,
                suffix,
                template,
            } => rewrite_calls(line, callee, suffix, template),
        }
    }
}

fn rewrite_calls<'a>(
    line: &'a str,
    callee: &Regex,
    suffix: &str,
    template: &CallTemplate,
) -> Cow<'a, str> {
    let mut out = String::new();
    let mut copied = 0;
    let mut cursor = 0;
    let mut changed = false;

    while cursor <= line.len() {
        let Some(m) = callee.find_at(line, cursor) else {
            break;
        };
        // An empty callee match must still move the scan forward.
        cursor = if m.is_empty() {
            line[m.end()..]
                .chars()
                .next()
                .map_or(line.len() + 1, |c| m.end() + c.len_utf8())
        } else {
            m.end()
        };
        let Some(open) = open_paren_after(line, m.end()) else {
            continue;
        };
        let Some(call) = scan_call(line, open) else {
            continue;
        };
        let Some(end) = consume_suffix(line, call.end, suffix) else {
            continue;
        };

        out.push_str(&line[copied..m.start()]);
        out.push_str(&template.expand(&call));
        copied = end;
        cursor = end;
        changed = true;
    }

    if !changed {
        return Cow::Borrowed(line);
    }
    out.push_str(&line[copied..]);
    Cow::Owned(out)
}

fn open_paren_after(line: &str, from: usize) -> Option<usize> {
    let rest = &line[from..];
    let skipped = rest.len() - rest.trim_start().len();
    rest[skipped..].starts_with('(').then_some(from + skipped)
}

fn consume_suffix(line: &str, from: usize, suffix: &str) -> Option<usize> {
    if suffix.is_empty() {
        return Some(from);
    }
    let rest = &line[from..];
    let skipped = rest.len() - rest.trim_start().len();
    rest[skipped..]
        .starts_with(suffix)
        .then_some(from + skipped + suffix.len())
}

/// Ordered, immutable collection of rewrite rules.
///
/// Built once and shared (`Arc<RuleTable>`) across conversions; nothing in it
/// is mutated while converting.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<RewriteRule>,
}

impl RuleTable {
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// Compile a table from declarative specs, keeping their order.
    pub fn from_specs(specs: &[RuleSpec]) -> Result<Self> {
        let rules = specs
            .iter()
            .map(RuleSpec::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { rules })
    }

    /// The built-in Selenium → Playwright mappings.
    pub fn standard() -> Result<Self> {
        Self::from_specs(STANDARD_RULES)
    }

    /// Append a rule after the existing ones.
    pub fn with_rule(mut self, rule: RewriteRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RewriteRule> {
        self.rules.iter()
    }

    /// Run every rule over `line` in order.
    ///
    /// `//` comment lines match nothing, including lines that become comments
    /// part-way through the table.
    pub fn apply(&self, line: &str) -> String {
        self.rewrite(line).text
    }

    /// Like [`RuleTable::apply`], also reporting whether an opening rule fired.
    pub fn rewrite(&self, line: &str) -> Rewritten {
        let mut current = line.to_string();
        let mut opens_body = false;
        for rule in &self.rules {
            if current.trim_start().starts_with("//") {
                break;
            }
            if let Cow::Owned(next) = rule.apply(&current) {
                current = next;
                opens_body |= rule.opens_body;
            }
        }
        Rewritten {
            text: current,
            opens_body,
        }
    }
}

/// One line after the Rule Table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub text: String,
    /// A test, hook or `main` declaration was translated on this line.
    pub opens_body: bool,
}

impl From<String> for Rewritten {
    fn from(text: String) -> Self {
        Self {
            text,
            opens_body: false,
        }
    }
}
