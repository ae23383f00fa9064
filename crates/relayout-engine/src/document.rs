//! Line-oriented document buffer

use std::ops::Range;

/// Newline flavor detected when a document is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Newline {
    Lf,
    CrLf,
}

impl Newline {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }
}

/// An in-memory, line-oriented document.
///
/// Lines are stored without terminators; the newline flavor and the presence
/// of a final trailing newline are remembered from the source, so documents
/// with a uniform flavor render back byte for byte. The document is the only
/// entity that outlives a transformation phase: it is loaded once, mutated in
/// place by each phase, and rendered once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
    newline: Newline,
    trailing_newline: bool,
}

impl Document {
    /// Split UTF-8 source text into lines.
    pub fn parse(source: &str) -> Self {
        let newline = if source.contains("\r\n") {
            Newline::CrLf
        } else {
            Newline::Lf
        };
        let trailing_newline = source.ends_with('\n');

        let mut lines: Vec<String> = if source.is_empty() {
            Vec::new()
        } else {
            source
                .split('\n')
                .map(|piece| piece.strip_suffix('\r').unwrap_or(piece).to_string())
                .collect()
        };
        if trailing_newline {
            lines.pop();
        }

        Self {
            lines,
            newline,
            trailing_newline,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn newline(&self) -> Newline {
        self.newline
    }

    /// Remove `[range.start, range.end)` and return the removed lines.
    ///
    /// Out-of-bounds ranges are clamped to the document.
    pub fn remove_range(&mut self, range: Range<usize>) -> Vec<String> {
        let end = range.end.min(self.lines.len());
        let start = range.start.min(end);
        self.lines.drain(start..end).collect()
    }

    /// Insert `group` before line `at`; `at == len` appends.
    pub fn insert_at(&mut self, at: usize, group: Vec<String>) {
        let at = at.min(self.lines.len());
        self.lines.splice(at..at, group);
    }

    /// Overwrite one line; out-of-bounds indices are ignored.
    pub fn replace_line(&mut self, index: usize, line: String) {
        if let Some(slot) = self.lines.get_mut(index) {
            *slot = line;
        }
    }

    /// Delete one line, returning it; out-of-bounds indices are ignored.
    pub fn remove_line(&mut self, index: usize) -> Option<String> {
        if index < self.lines.len() {
            Some(self.lines.remove(index))
        } else {
            None
        }
    }

    /// Join the lines back into document text.
    pub fn render(&self) -> String {
        let mut out = self.lines.join(self.newline.as_str());
        if self.trailing_newline {
            out.push_str(self.newline.as_str());
        }
        out
    }
}
