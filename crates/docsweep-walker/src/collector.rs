//! Project-wide extraction.
//!
//! Ties the pieces together: load the ignore rules, select candidate
//! files, extract each one, and hand back every fragment in discovery
//! order along with some counts.

use crate::error::Result;
use crate::rules::{DefaultExcludes, IgnoreFilter};
use crate::selector::{select_files, SelectOptions};
use docsweep_core::{extract_file, CommentFragment};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Extensions scanned when the caller doesn't ask for any.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".js", ".jsx", ".ts", ".tsx"];

/// Result of collecting a project's doc comments.
#[derive(Debug)]
pub struct CollectResult {
    /// Every fragment, grouped by file in first-discovery order.
    pub fragments: Vec<CommentFragment>,

    /// Number of files that passed the ignore filter and were read.
    pub files_processed: usize,

    /// Number of files with at least one fragment.
    pub files_with_comments: usize,

    /// Time taken in milliseconds.
    pub duration_ms: u64,
}

impl CollectResult {
    pub fn fragment_count(&self) -> usize {
        self.fragments.len()
    }
}

/// Options for collection.
#[derive(Debug, Clone)]
pub struct CollectOptions {
    /// Extensions to look for, each with its leading dot.
    pub extensions: Vec<String>,

    /// Segment names that are always skipped.
    pub excludes: DefaultExcludes,

    /// Follow symbolic links when walking directories.
    pub follow_symlinks: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            excludes: DefaultExcludes::default(),
            follow_symlinks: false,
        }
    }
}

/// Collects doc comments from every selected file under `root`.
///
/// # Example
///
/// ```no_run
/// use docsweep_walker::{collect_documentation, CollectOptions};
/// use std::path::Path;
///
/// let result = collect_documentation(Path::new("./web"), CollectOptions::default()).unwrap();
/// println!("{} comments in {} files", result.fragment_count(), result.files_with_comments);
/// ```
pub fn collect_documentation(root: &Path, options: CollectOptions) -> Result<CollectResult> {
    collect_documentation_with(root, options, |_, _| {})
}

/// Like [`collect_documentation`], calling `on_file` with the path and
/// fragment count of each file that had at least one fragment.
pub fn collect_documentation_with<F>(
    root: &Path,
    options: CollectOptions,
    mut on_file: F,
) -> Result<CollectResult>
where
    F: FnMut(&Path, usize),
{
    let start = Instant::now();
    info!("Scanning {} for {}", root.display(), options.extensions.join(", "));

    let filter = IgnoreFilter::load(root, options.excludes)?;
    let select = SelectOptions {
        follow_symlinks: options.follow_symlinks,
    };
    let selector = select_files(filter, options.extensions, select);

    let mut fragments = Vec::new();
    let mut files_processed = 0;
    let mut files_with_comments = 0;

    for candidate in selector.files() {
        let candidate = candidate?;
        files_processed += 1;
        let found = extract_file(&candidate.path)?;
        debug!("{} comments in {}", found.len(), candidate.path.display());

        if !found.is_empty() {
            files_with_comments += 1;
            on_file(&candidate.path, found.len());
            fragments.extend(found);
        }
    }

    let duration = start.elapsed();
    info!(
        "Found {} comments in {} of {} files in {:?}",
        fragments.len(),
        files_with_comments,
        files_processed,
        duration
    );

    Ok(CollectResult {
        fragments,
        files_processed,
        files_with_comments,
        duration_ms: duration.as_millis() as u64,
    })
}
