//! Candidate file discovery.
//!
//! Walks the tree once per requested extension and yields every file
//! whose name ends with that extension and which the ignore filter
//! lets through. Hidden directories are walked too.

use crate::error::{Result, WalkError};
use crate::rules::IgnoreFilter;
use ignore::{DirEntry, WalkBuilder};
use std::path::{Path, PathBuf};
use tracing::trace;

/// A file picked for extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    /// The requested extension this file was found under, dot included.
    pub extension: String,
}

/// Options for file discovery.
#[derive(Debug, Clone, Default)]
pub struct SelectOptions {
    /// Follow symbolic links when walking directories.
    pub follow_symlinks: bool,
}

/// Finds candidate files under a root.
///
/// Each call to [`FileSelector::files`] starts a fresh walk, so the
/// selector can be iterated as many times as needed.
pub struct FileSelector {
    filter: IgnoreFilter,
    extensions: Vec<String>,
    options: SelectOptions,
}

impl FileSelector {
    pub fn new(filter: IgnoreFilter, extensions: Vec<String>, options: SelectOptions) -> Self {
        Self {
            filter,
            extensions,
            options,
        }
    }

    pub fn root(&self) -> &Path {
        self.filter.root()
    }

    /// Lazily yields candidates, extension by extension in the order
    /// they were given.
    ///
    /// A file is yielded at most once per extension. Entries the walker
    /// can't read are yielded as errors.
    pub fn files(&self) -> impl Iterator<Item = Result<CandidateFile>> + '_ {
        self.extensions
            .iter()
            .flat_map(move |extension| self.files_with_extension(extension))
    }

    fn files_with_extension<'a>(
        &'a self,
        extension: &'a str,
    ) -> impl Iterator<Item = Result<CandidateFile>> + 'a {
        let prune = self.filter.clone();
        let root = self.filter.root().to_path_buf();

        let walker = WalkBuilder::new(self.filter.root())
            .standard_filters(false)
            .hidden(false)
            .follow_links(self.options.follow_symlinks)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| !is_pruned(entry, &root, &prune))
            .build();

        walker.filter_map(move |entry| {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => return Some(Err(WalkError::from(e))),
            };
            if !is_file(&entry) || !has_extension(entry.path(), extension) {
                return None;
            }
            if self.filter.should_ignore(entry.path()) {
                trace!("Ignoring {}", entry.path().display());
                return None;
            }
            Some(Ok(CandidateFile {
                path: entry.into_path(),
                extension: extension.to_string(),
            }))
        })
    }
}

/// Finds candidate files under the filter's root for the given extensions.
///
/// # Example
///
/// ```no_run
/// use docsweep_walker::{select_files, DefaultExcludes, IgnoreFilter, SelectOptions};
/// use std::path::Path;
///
/// let root = Path::new("./my-project");
/// let filter = IgnoreFilter::load(root, DefaultExcludes::default()).unwrap();
/// let extensions = vec![".ts".to_string()];
/// for file in select_files(filter, extensions, SelectOptions::default()).files() {
///     println!("{}", file.unwrap().path.display());
/// }
/// ```
pub fn select_files(
    filter: IgnoreFilter,
    extensions: Vec<String>,
    options: SelectOptions,
) -> FileSelector {
    FileSelector::new(filter, extensions, options)
}

/// Regular files, and links to regular files even when links to
/// directories aren't being followed.
fn is_file(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(t) if t.is_file() => true,
        Some(t) if t.is_symlink() => entry.path().is_file(),
        _ => false,
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(extension))
        .unwrap_or(false)
}

/// Directories excluded by name are not descended into at all.
fn is_pruned(entry: &DirEntry, root: &Path, filter: &IgnoreFilter) -> bool {
    if entry.depth() == 0 || entry.path() == root {
        return false;
    }
    let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
    is_dir && filter.prunes_dir(&entry.file_name().to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{DefaultExcludes, IgnoreRules};
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn relative_paths(selector: &FileSelector) -> Vec<String> {
        selector
            .files()
            .map(|f| {
                f.unwrap()
                    .path
                    .strip_prefix(selector.root())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    fn selector(root: &Path, rules: &str, extensions: &[&str]) -> FileSelector {
        let filter = IgnoreFilter::new(root, IgnoreRules::parse(rules), DefaultExcludes::default());
        let extensions = extensions.iter().map(|e| e.to_string()).collect();
        select_files(filter, extensions, SelectOptions::default())
    }

    #[test]
    fn test_select_by_extension() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "src/a.ts");
        touch(dir.path(), "src/b.js");
        touch(dir.path(), "src/nested/c.ts");
        touch(dir.path(), "README.md");

        let sel = selector(dir.path(), "", &[".ts"]);
        assert_eq!(relative_paths(&sel), vec!["src/a.ts", "src/nested/c.ts"]);
    }

    #[test]
    fn test_extensions_processed_in_given_order() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "a.ts");
        touch(dir.path(), "b.js");

        let sel = selector(dir.path(), "", &[".js", ".ts"]);
        assert_eq!(relative_paths(&sel), vec!["b.js", "a.ts"]);
    }

    #[test]
    fn test_overlapping_extensions_are_not_deduplicated() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "view.jsx");

        let sel = selector(dir.path(), "", &[".jsx", "x"]);
        let files: Vec<_> = sel.files().map(|f| f.unwrap().extension).collect();
        assert_eq!(files, vec![".jsx", "x"]);
    }

    #[test]
    fn test_hidden_directories_are_walked() {
        let dir = tempdir().unwrap();
        touch(dir.path(), ".config/setup.ts");

        let sel = selector(dir.path(), "", &[".ts"]);
        assert_eq!(relative_paths(&sel), vec![".config/setup.ts"]);
    }

    #[test]
    fn test_excluded_and_ignored_paths_are_dropped() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "src/a.ts");
        touch(dir.path(), "node_modules/pkg/index.ts");
        touch(dir.path(), "src/gen/out.ts");
        touch(dir.path(), "src/a.spec.ts");

        let sel = selector(dir.path(), "gen\n*.spec.ts", &[".ts"]);
        assert_eq!(relative_paths(&sel), vec!["src/a.ts"]);
    }

    #[test]
    fn test_directories_with_matching_names_are_skipped() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("weird.ts")).unwrap();
        touch(dir.path(), "weird.ts/inner.ts");

        let sel = selector(dir.path(), "", &[".ts"]);
        assert_eq!(relative_paths(&sel), vec!["weird.ts/inner.ts"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_files_are_selected_without_following() {
        let dir = tempdir().unwrap();
        let outside = tempdir().unwrap();
        fs::write(outside.path().join("shared.ts"), "").unwrap();
        std::os::unix::fs::symlink(outside.path().join("shared.ts"), dir.path().join("link.ts"))
            .unwrap();
        fs::create_dir_all(outside.path().join("lib")).unwrap();
        fs::write(outside.path().join("lib/inner.ts"), "").unwrap();
        std::os::unix::fs::symlink(outside.path().join("lib"), dir.path().join("lib")).unwrap();

        let sel = selector(dir.path(), "", &[".ts"]);
        assert_eq!(relative_paths(&sel), vec!["link.ts"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_link_loop_is_an_error_when_following() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "src/a.ts");
        std::os::unix::fs::symlink(dir.path(), dir.path().join("src/again")).unwrap();

        let filter = IgnoreFilter::new(dir.path(), IgnoreRules::default(), DefaultExcludes::default());
        let options = SelectOptions {
            follow_symlinks: true,
        };
        let sel = select_files(filter, vec![".ts".to_string()], options);
        let results: Vec<_> = sel.files().collect();

        assert!(results.iter().any(|r| matches!(r, Err(WalkError::Walk(_)))));
        assert!(results.iter().any(|r| r.is_ok()));
    }

    #[test]
    fn test_selector_is_restartable() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "a.ts");
        touch(dir.path(), "b.ts");

        let sel = selector(dir.path(), "", &[".ts"]);
        assert_eq!(relative_paths(&sel), relative_paths(&sel));
        assert_eq!(sel.files().count(), 2);
    }
}
