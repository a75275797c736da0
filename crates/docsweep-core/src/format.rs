//! Rendering extracted fragments into a single document.
//!
//! Fragments are grouped by the file they came from. Files appear in
//! the order they were first seen and each file's fragments keep their
//! source order. Comment syntax is stripped before rendering.

use crate::error::{DocError, Result};
use crate::fragment::CommentFragment;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Title line at the top of every rendered document.
pub const DOCUMENT_TITLE: &str = "# Project Documentation";

/// Output formats we can render.
///
/// Markdown is the only one today; anything else is rejected up front
/// so a run never gets as far as scanning with a format it can't emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = DocError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(DocError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Renders fragments in the format named by `format`.
///
/// Fails with [`DocError::UnsupportedFormat`] when the name isn't a
/// known format. Nothing is written anywhere; the caller persists the
/// returned text.
pub fn format_documentation(fragments: &[CommentFragment], format: &str) -> Result<String> {
    let format: OutputFormat = format.parse()?;
    Ok(render(fragments, format))
}

/// Renders fragments in an already-validated format.
pub fn render(fragments: &[CommentFragment], format: OutputFormat) -> String {
    match format {
        OutputFormat::Markdown => render_markdown(fragments),
    }
}

fn render_markdown(fragments: &[CommentFragment]) -> String {
    let mut doc = format!("{}\n\n", DOCUMENT_TITLE);

    for (file, comments) in group_by_file(fragments) {
        doc.push_str(&format!("## {}\n\n", file));
        for comment in comments {
            doc.push_str(&format!("```\n{}\n```\n\n", clean_comment(comment)));
        }
    }

    doc
}

/// Groups fragment texts by file, keeping first-seen file order.
pub fn group_by_file(fragments: &[CommentFragment]) -> IndexMap<&str, Vec<&str>> {
    let mut groups: IndexMap<&str, Vec<&str>> = IndexMap::new();

    for fragment in fragments {
        groups
            .entry(fragment.file.as_str())
            .or_default()
            .push(fragment.text.as_str());
    }

    groups
}

/// Strips comment syntax from a raw fragment.
///
/// Removes `/**`, `*/` and `//` markers plus a leading `*` continuation
/// marker on each line, trims every line, and drops lines left empty.
pub fn clean_comment(raw: &str) -> String {
    raw.lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn clean_line(line: &str) -> &str {
    let mut line = line.trim();
    line = line.strip_prefix("/**").unwrap_or(line);
    line = line.strip_suffix("*/").unwrap_or(line);
    line = line.trim_start();
    line = line.strip_prefix("//").unwrap_or(line).trim();

    // A bare `*` is an empty continuation line.
    match line.strip_prefix('*') {
        Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => rest.trim(),
        _ => line,
    }
}
