//! Docsweep Core - doc comment extraction and rendering
//!
//! This crate knows how to find documentation comments in source text
//! and how to turn a pile of them into one readable document. It has no
//! opinion about which files to look at; see `docsweep-walker` for that.
//!
//! Two comment shapes are recognised:
//! - `/** ... */` blocks, matched up to the first closing `*/`
//! - runs of consecutive `// *` lines
//!
//! # Example
//!
//! ```
//! use docsweep_core::{extract_source, format_documentation};
//!
//! let fragments = extract_source("/** Adds numbers. */\nfunction add() {}", "math.js");
//! let doc = format_documentation(&fragments, "markdown").unwrap();
//! assert!(doc.contains("Adds numbers."));
//! ```

pub mod error;
pub mod extract;
pub mod format;
pub mod fragment;
pub mod shapes;

pub use error::{DocError, Result};
pub use extract::{extract_file, extract_source, CommentScanner};
pub use format::{clean_comment, format_documentation, render, OutputFormat};
pub use fragment::{CommentFragment, Span};
pub use shapes::{default_shapes, CommentShape};
