//! Shell-style glob matching for ignore rules.
//!
//! Backed by `glob::Pattern` with `*` allowed to cross `/`, like
//! fnmatch. Runs of `*` are collapsed first so `**` is never recursive.

use glob::{MatchOptions, Pattern};

const OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: false,
    require_literal_leading_dot: false,
};

/// A compiled glob pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Glob {
    Pattern(Pattern),
    /// Patterns `glob` rejects (an unclosed `[`, say) match literally.
    Literal(String),
}

impl Glob {
    /// Compiles a pattern. Never fails.
    pub fn new(pattern: &str) -> Self {
        let collapsed = collapse_stars(pattern);
        match Pattern::new(&collapsed) {
            Ok(compiled) => Self::Pattern(compiled),
            Err(_) => Self::Literal(pattern.to_string()),
        }
    }

    /// Tests whether the whole of `text` matches.
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Pattern(pattern) => pattern.matches_with(text, OPTIONS),
            Self::Literal(literal) => literal == text,
        }
    }
}

fn collapse_stars(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    for c in pattern.chars() {
        if !(c == '*' && out.ends_with('*')) {
            out.push(c);
        }
    }
    out
}
