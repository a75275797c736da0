//! Errors raised while walking a project.

use docsweep_core::DocError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WalkError>;

#[derive(Error, Debug)]
pub enum WalkError {
    /// The rules file exists but couldn't be read.
    #[error("failed to read rules file '{path}': {source}")]
    RulesFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The directory walk hit an entry it couldn't read, or a link loop.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Extraction or rendering failed.
    #[error(transparent)]
    Doc(#[from] DocError),
}
