//! Extractor module - pulls doc comments out of source text.
//!
//! The extractor walks the text once, asking every shape for its next
//! match and taking whichever starts first. Scanning resumes after the
//! end of the chosen match, so fragments never overlap and come out in
//! source order.

use crate::error::{DocError, Result};
use crate::fragment::{CommentFragment, Span};
use crate::shapes::{default_shapes, CommentShape};
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

/// Extracts every doc comment from a file on disk.
///
/// Files that aren't valid UTF-8 are assumed to be binary and yield no
/// fragments. Any other read failure is returned as an error.
///
/// # Example
///
/// ```no_run
/// use docsweep_core::extract_file;
/// use std::path::Path;
///
/// let fragments = extract_file(Path::new("src/index.ts")).unwrap();
/// println!("Found {} doc comments", fragments.len());
/// ```
pub fn extract_file(path: &Path) -> Result<Vec<CommentFragment>> {
    let bytes = fs::read(path).map_err(|e| DocError::io(path, e))?;

    let source = match String::from_utf8(bytes) {
        Ok(source) => source,
        Err(_) => {
            debug!("Skipping undecodable file {}", path.display());
            return Ok(vec![]);
        }
    };

    let file_path = path.to_string_lossy();
    Ok(extract_source(strip_bom(&source), &file_path))
}

/// Extracts doc comments from in-memory source, tagging each with
/// `file_path`.
pub fn extract_source(source: &str, file_path: &str) -> Vec<CommentFragment> {
    let shapes = default_shapes();
    CommentScanner::new(source, &shapes)
        .map(|span| CommentFragment::new(file_path, span.slice(source)))
        .collect()
}

/// Lazily interleaves several shapes over one text.
///
/// Each shape's next match is remembered and only searched for again
/// once the scan has moved past its start, so every shape walks the
/// text once.
pub struct CommentScanner<'a> {
    source: &'a str,
    shapes: &'a [Box<dyn CommentShape>],
    /// Per shape: `None` until searched, `Some(None)` once exhausted.
    pending: Vec<Option<Option<Span>>>,
    pos: usize,
}

impl<'a> CommentScanner<'a> {
    pub fn new(source: &'a str, shapes: &'a [Box<dyn CommentShape>]) -> Self {
        Self {
            source,
            shapes,
            pending: vec![None; shapes.len()],
            pos: 0,
        }
    }
}

impl Iterator for CommentScanner<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        for (shape, pending) in self.shapes.iter().zip(self.pending.iter_mut()) {
            let stale = match pending {
                None => true,
                Some(Some(span)) => span.start < self.pos,
                Some(None) => false,
            };
            if stale {
                *pending = Some(shape.find(self.source, self.pos));
            }
        }

        // Ties go to the earlier shape in the list.
        let (index, span) = self
            .pending
            .iter()
            .enumerate()
            .filter_map(|(i, pending)| pending.flatten().map(|span| (i, span)))
            .min_by_key(|(_, span)| span.start)?;

        trace!(
            "{} comment at bytes {}..{}",
            self.shapes[index].name(),
            span.start,
            span.end
        );
        self.pos = span.end.max(self.pos + 1);
        Some(span)
    }
}

fn strip_bom(source: &str) -> &str {
    source.strip_prefix('\u{feff}').unwrap_or(source)
}
