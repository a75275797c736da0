//! Comment fragment representation.
//!
//! A CommentFragment is one doc comment exactly as it appeared in the
//! source, tagged with the file it came from. Cleaning up the comment
//! syntax is left to the formatter.

use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Byte range of a matched comment within a source text.
///
/// Spans are half-open: `start` points at the first byte of the
/// opening marker and `end` one past the last byte of the comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slices the matched text out of `source`.
    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range()]
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// A doc comment pulled out of a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentFragment {
    /// Path of the file the comment came from, as it was discovered.
    pub file: String,

    /// Raw comment text, delimiters included.
    pub text: String,
}

impl CommentFragment {
    pub fn new(file: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_slices_source() {
        let source = "let x; /** doc */ let y;";
        let span = Span::new(7, 17);
        assert_eq!(span.slice(source), "/** doc */");
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
    }
}
