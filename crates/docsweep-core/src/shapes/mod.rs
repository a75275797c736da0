//! Comment shapes.
//!
//! Each kind of doc comment we recognise lives in its own submodule and
//! implements the CommentShape trait. A shape only knows how to find the
//! next occurrence of itself; interleaving the shapes and keeping the
//! matches from overlapping is the extractor's job.

mod block;
mod line;

pub use block::{block_spans, BlockShape};
pub use line::{line_spans, LineShape};

use crate::fragment::Span;

/// Trait for a single syntactic form of doc comment.
pub trait CommentShape: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Finds the first comment of this shape that starts at or after
    /// byte offset `from`.
    ///
    /// Returns None once the rest of the text holds no such comment.
    fn find(&self, source: &str, from: usize) -> Option<Span>;
}

/// Lazy sequence of non-overlapping matches of one shape.
pub struct Spans<'a> {
    shape: &'a dyn CommentShape,
    source: &'a str,
    pos: usize,
}

impl<'a> Spans<'a> {
    pub fn new(shape: &'a dyn CommentShape, source: &'a str) -> Self {
        Self {
            shape,
            source,
            pos: 0,
        }
    }
}

impl Iterator for Spans<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let span = self.shape.find(self.source, self.pos)?;
        // Shapes never match empty text, but don't spin if one does.
        self.pos = span.end.max(self.pos + 1);
        Some(span)
    }
}

/// The shapes the extractor looks for, in priority order.
pub fn default_shapes() -> Vec<Box<dyn CommentShape>> {
    vec![Box::new(BlockShape), Box::new(LineShape)]
}
