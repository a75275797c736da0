//! Error types for extraction and rendering.
//!
//! Only two things can really go wrong here: a file can't be read,
//! or the caller asked for an output format we don't render.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience type for functions that can fail during extraction.
pub type Result<T> = std::result::Result<T, DocError>;

/// Things that can go wrong when extracting or rendering doc comments.
#[derive(Error, Debug)]
pub enum DocError {
    /// Couldn't read the file from disk. Undecodable content is not
    /// reported through here; those files are skipped as binary.
    #[error("failed to read file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The requested output format isn't one we know how to render.
    #[error("unsupported output format '{0}' (supported: markdown)")]
    UnsupportedFormat(String),
}

impl DocError {
    /// Creates an IO error with the path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
