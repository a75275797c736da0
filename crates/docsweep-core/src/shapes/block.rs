//! `/** ... */` block comments.

use super::{CommentShape, Spans};
use crate::fragment::Span;

const OPEN: &str = "/**";
const CLOSE: &str = "*/";

/// Matches a block comment from its `/**` opener to the first `*/`
/// after it. The match is the shortest possible, so two comments on
/// one line stay separate.
pub struct BlockShape;

impl CommentShape for BlockShape {
    fn name(&self) -> &'static str {
        "block"
    }

    fn find(&self, source: &str, from: usize) -> Option<Span> {
        let start = from + source.get(from..)?.find(OPEN)?;
        let body = start + OPEN.len();
        // An unterminated opener means no later opener can close either.
        let close = body + source[body..].find(CLOSE)?;
        Some(Span::new(start, close + CLOSE.len()))
    }
}

/// All block comments in `source`, in order.
pub fn block_spans(source: &str) -> Spans<'_> {
    Spans::new(&BlockShape, source)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(source: &str) -> Vec<&str> {
        block_spans(source).map(|s| s.slice(source)).collect()
    }

    #[test]
    fn test_single_block() {
        assert_eq!(matches("/** Hello */"), vec!["/** Hello */"]);
    }

    #[test]
    fn test_two_blocks_on_one_line_stay_separate() {
        let source = "/** one */ let x = 1; /** two */";
        assert_eq!(matches(source), vec!["/** one */", "/** two */"]);
    }

    #[test]
    fn test_multiline_block() {
        let source = "code();\n/**\n * Adds things.\n * @param a first\n */\nfunction add(a) {}";
        assert_eq!(
            matches(source),
            vec!["/**\n * Adds things.\n * @param a first\n */"]
        );
    }

    #[test]
    fn test_plain_block_comment_is_ignored() {
        assert!(matches("/* not a doc comment */").is_empty());
    }

    #[test]
    fn test_unterminated_block_is_ignored() {
        assert!(matches("/** never closed\nconst a = 1;").is_empty());
    }

    #[test]
    fn test_opener_does_not_close_itself() {
        // `/**/` is an empty plain comment, not a doc comment.
        assert!(matches("/**/ x").is_empty());
        assert_eq!(matches("/***/"), vec!["/***/"]);
    }

    #[test]
    fn test_find_resumes_from_offset() {
        let source = "/** a */ /** b */";
        let span = BlockShape.find(source, 1).unwrap();
        assert_eq!(span.slice(source), "/** b */");
    }
}
