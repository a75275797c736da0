//! `// *` line comment runs.

use super::{CommentShape, Spans};
use crate::fragment::Span;

/// Matches runs of consecutive lines that each start (after indentation)
/// with `//`, optional whitespace, then `*`. A run ends at the first line
/// that doesn't have that form, or at end of input.
pub struct LineShape;

impl CommentShape for LineShape {
    fn name(&self) -> &'static str {
        "line"
    }

    fn find(&self, source: &str, from: usize) -> Option<Span> {
        let mut offset = next_line_start(source, from)?;
        let mut run: Option<Span> = None;

        loop {
            let rest = &source[offset..];
            let line_len = rest.find('\n').unwrap_or(rest.len());
            let end = offset + line_len;

            match doc_marker_offset(&rest[..line_len]) {
                Some(indent) => {
                    let start = run.map_or(offset + indent, |span| span.start);
                    run = Some(Span::new(start, end));
                }
                None if run.is_some() => break,
                None => {}
            }

            if end == source.len() {
                break;
            }
            offset = end + 1;
        }

        run
    }
}

/// All line comment runs in `source`, in order.
pub fn line_spans(source: &str) -> Spans<'_> {
    Spans::new(&LineShape, source)
}

/// Offset of the first line beginning at or after `from`.
fn next_line_start(source: &str, from: usize) -> Option<usize> {
    if from == 0 {
        return Some(0);
    }
    let before = source.get(..from)?;
    if before.ends_with('\n') {
        return Some(from);
    }
    let newline = source.get(from..)?.find('\n')?;
    Some(from + newline + 1)
}

/// If `line` is a `// *` doc line, returns the offset of its `//`.
fn doc_marker_offset(line: &str) -> Option<usize> {
    let trimmed = line.trim_start();
    let after_slashes = trimmed.strip_prefix("//")?;
    if after_slashes.trim_start().starts_with('*') {
        Some(line.len() - trimmed.len())
    } else {
        None
    }
}
