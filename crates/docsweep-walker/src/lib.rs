//! Docsweep Walker - finding the files worth reading
//!
//! This crate handles the file system side of things:
//! - Loading ignore rules from the project's `.gitignore`
//! - Walking directories to find source files by extension
//! - Running extraction over every selected file
//!
//! A fixed set of directory names (`node_modules`, `.git`, ...) is
//! always skipped unless the caller replaces it.

mod collector;
mod error;
mod pattern;
mod rules;
mod selector;

pub use collector::{
    collect_documentation, collect_documentation_with, CollectOptions, CollectResult,
    DEFAULT_EXTENSIONS,
};
pub use error::{Result, WalkError};
pub use pattern::Glob;
pub use rules::{
    DefaultExcludes, IgnoreFilter, IgnoreRule, IgnoreRules, DEFAULT_EXCLUDED_DIRS, RULES_FILE,
};
pub use selector::{select_files, CandidateFile, FileSelector, SelectOptions};
