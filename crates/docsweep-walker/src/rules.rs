//! Ignore rules.
//!
//! Two layers decide whether a path is skipped:
//! - a set of directory names that are always excluded (`.git`,
//!   `node_modules` and friends), checked against every path segment
//! - glob rules loaded from the project's `.gitignore`
//!
//! Rules that start with `/` are anchored: they are matched against the
//! whole path relative to the root. Other rules match the whole relative
//! path or any single segment of it.

use crate::error::{Result, WalkError};
use crate::pattern::Glob;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Name of the rules file looked up in the project root.
pub const RULES_FILE: &str = ".gitignore";

/// Directory names that are skipped unless the caller says otherwise.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules", ".git", "dist", "build", "coverage"];

/// The always-excluded segment names.
///
/// Passed explicitly to the filter so callers can extend or replace it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefaultExcludes(Vec<String>);

impl Default for DefaultExcludes {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_DIRS.iter().copied())
    }
}

impl DefaultExcludes {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// An empty set; only loaded rules apply.
    pub fn none() -> Self {
        Self(Vec::new())
    }

    /// Adds names, skipping ones already present.
    pub fn extend<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.0.contains(&name) {
                self.0.push(name);
            }
        }
    }

    pub fn contains(&self, segment: &str) -> bool {
        self.0.iter().any(|name| name == segment)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One line of the rules file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreRule {
    /// The pattern with any anchoring `/` and trailing `/` removed.
    pub pattern: String,
    /// Whether the source line started with `/`.
    pub anchored: bool,
    glob: Glob,
}

impl IgnoreRule {
    /// Parses one rules-file line. Returns None for blanks and comments.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        // Directory markers are treated the same as file markers.
        let line = line.trim_end_matches('/');
        let (pattern, anchored) = match line.strip_prefix('/') {
            Some(rest) => (rest, true),
            None => (line, false),
        };
        if pattern.is_empty() {
            return None;
        }

        Some(Self {
            pattern: pattern.to_string(),
            anchored,
            glob: Glob::new(pattern),
        })
    }

    /// Tests the rule against a root-relative path split into segments.
    pub fn matches(&self, relative: &str, segments: &[String]) -> bool {
        if self.glob.is_match(relative) {
            return true;
        }
        !self.anchored && segments.iter().any(|s| self.glob.is_match(s))
    }

    /// Tests the rule against a single name, as an unanchored rule would.
    fn matches_segment(&self, segment: &str) -> bool {
        !self.anchored && self.glob.is_match(segment)
    }
}

/// Rules loaded from a project's rules file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreRules {
    rules: Vec<IgnoreRule>,
}

impl IgnoreRules {
    /// Loads `<root>/.gitignore`. A missing file gives an empty set.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(RULES_FILE);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No rules file at {}", path.display());
                return Ok(Self::default());
            }
            Err(source) => return Err(WalkError::RulesFile { path, source }),
        };

        let rules = Self::parse(&String::from_utf8_lossy(&bytes));
        debug!("Loaded {} ignore rules from {}", rules.len(), path.display());
        Ok(rules)
    }

    /// Parses rules-file text.
    pub fn parse(text: &str) -> Self {
        Self {
            rules: text.lines().filter_map(IgnoreRule::parse).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &IgnoreRule> {
        self.rules.iter()
    }
}

/// Decides whether paths under a root are excluded.
#[derive(Debug, Clone)]
pub struct IgnoreFilter {
    root: PathBuf,
    rules: IgnoreRules,
    excludes: DefaultExcludes,
}

impl IgnoreFilter {
    pub fn new(root: impl Into<PathBuf>, rules: IgnoreRules, excludes: DefaultExcludes) -> Self {
        Self {
            root: root.into(),
            rules,
            excludes,
        }
    }

    /// Builds a filter from the rules file under `root`.
    pub fn load(root: &Path, excludes: DefaultExcludes) -> Result<Self> {
        Ok(Self::new(root, IgnoreRules::load(root)?, excludes))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn excludes(&self) -> &DefaultExcludes {
        &self.excludes
    }

    /// Returns true if `path` is excluded by a default segment or a rule.
    ///
    /// Paths outside the root are matched as given.
    pub fn should_ignore(&self, path: &Path) -> bool {
        let relative = path.strip_prefix(&self.root).unwrap_or(path);
        let segments = segments(relative);

        if segments.iter().any(|s| self.excludes.contains(s)) {
            return true;
        }

        let joined = segments.join("/");
        self.rules.iter().any(|rule| rule.matches(&joined, &segments))
    }

    /// Whether a directory with this name can be skipped wholesale.
    ///
    /// Only segment-based checks qualify: anything they exclude is
    /// excluded for every path underneath too.
    pub fn prunes_dir(&self, name: &str) -> bool {
        self.excludes.contains(name) || self.rules.iter().any(|rule| rule.matches_segment(name))
    }
}

fn segments(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}
