//! Line model shared by the engine passes.

/// One line of text together with the length of its leading whitespace.
///
/// The indentation is kept as a byte length into `text` so that markers
/// injected later can reuse the exact original prefix (tabs included).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    text: String,
    indent: usize,
}

impl SourceLine {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let indent = text.len() - text.trim_start().len();
        Self { text, indent }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Leading whitespace, verbatim.
    pub fn indent(&self) -> &str {
        &self.text[..self.indent]
    }

    /// Everything after the leading whitespace.
    pub fn content(&self) -> &str {
        &self.text[self.indent..]
    }

    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// `//` comment line.
    pub fn is_comment(&self) -> bool {
        self.content().starts_with("//")
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl From<&str> for SourceLine {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// Split a document into lines, dropping the `\r` of CRLF endings.
///
/// A trailing newline yields a final empty line, so joining with `\n`
/// restores the document.
pub fn split_lines(source: &str) -> Vec<&str> {
    source
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
