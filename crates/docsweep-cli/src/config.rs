//! Run settings: defaults, an optional JSON config file, and CLI flags,
//! merged in that order.

use docsweep_walker::{DefaultExcludes, DEFAULT_EXTENSIONS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file picked up from the project root when `--config` isn't given.
pub const CONFIG_FILE: &str = "docsweep.json";

pub const DEFAULT_OUTPUT: &str = "documentation.md";
pub const DEFAULT_FORMAT: &str = "markdown";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Contents of a config file. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
    /// Extra names added to the default exclusions.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
    /// Set to false to drop the built-in exclusions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_excludes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub follow_symlinks: Option<bool>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `path` if given, otherwise `<root>/docsweep.json` if it exists.
    pub fn discover(root: &Path, path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let candidate = root.join(CONFIG_FILE);
                if candidate.is_file() {
                    Self::load(&candidate)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// The config `init` writes: every default spelled out.
    pub fn defaults() -> Self {
        Self {
            output: Some(PathBuf::from(DEFAULT_OUTPUT)),
            format: Some(DEFAULT_FORMAT.to_string()),
            extensions: Some(DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect()),
            exclude: Vec::new(),
            default_excludes: Some(true),
            follow_symlinks: Some(false),
        }
    }
}

/// Values given on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output: Option<PathBuf>,
    pub format: Option<String>,
    pub extensions: Option<String>,
    pub exclude: Vec<String>,
    pub no_default_excludes: bool,
    pub follow_symlinks: bool,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub root: PathBuf,
    pub output: PathBuf,
    pub format: String,
    pub extensions: Vec<String>,
    pub excludes: DefaultExcludes,
    pub follow_symlinks: bool,
}

impl Settings {
    pub fn resolve(root: PathBuf, file: FileConfig, cli: CliOverrides) -> Self {
        let output = cli
            .output
            .or(file.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
        let format = cli
            .format
            .or(file.format)
            .unwrap_or_else(|| DEFAULT_FORMAT.to_string());

        let extensions = match (cli.extensions, file.extensions) {
            (Some(list), _) => parse_extensions(list.split(',')),
            (None, Some(list)) => parse_extensions(list.iter().map(String::as_str)),
            (None, None) => parse_extensions(DEFAULT_EXTENSIONS.iter().copied()),
        };

        let use_defaults = !cli.no_default_excludes && file.default_excludes.unwrap_or(true);
        let mut excludes = if use_defaults {
            DefaultExcludes::default()
        } else {
            DefaultExcludes::none()
        };
        excludes.extend(file.exclude);
        excludes.extend(cli.exclude);

        Self {
            root,
            output,
            format,
            extensions,
            excludes,
            follow_symlinks: cli.follow_symlinks || file.follow_symlinks.unwrap_or(false),
        }
    }
}

/// Trims entries, drops empty ones, and adds a leading dot where missing.
pub fn parse_extensions<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    raw.map(str::trim)
        .filter(|ext| !ext.is_empty())
        .map(|ext| {
            if ext.starts_with('.') {
                ext.to_string()
            } else {
                format!(".{}", ext)
            }
        })
        .collect()
}
