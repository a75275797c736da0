//! CLI command implementations.

use crate::config::{CliOverrides, FileConfig, Settings, CONFIG_FILE};
use colored::Colorize;
use docsweep_core::{render, OutputFormat};
use docsweep_walker::{collect_documentation_with, CollectOptions};
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Write a default config file into a project.
pub fn init(path: &Path) -> Result<()> {
    let config_path = path.join(CONFIG_FILE);

    if config_path.exists() {
        println!("{} Already initialized", "✓".green());
        return Ok(());
    }

    fs::create_dir_all(path)?;
    let text = serde_json::to_string_pretty(&FileConfig::defaults())?;
    fs::write(&config_path, text + "\n")?;

    println!("{} Wrote {}", "✓".green(), config_path.display());
    println!("  Run {} to generate documentation", "docsweep".cyan());

    Ok(())
}

/// Scan a project and write its doc comments to the output file.
pub fn extract(
    root: &Path,
    config: Option<&Path>,
    overrides: CliOverrides,
    verbose: bool,
) -> Result<()> {
    let root = std::path::absolute(root)?;
    let file_config = FileConfig::discover(&root, config)?;
    let settings = Settings::resolve(root, file_config, overrides);
    debug!("Resolved settings: {:?}", settings);

    // Reject the format before touching anything.
    let format: OutputFormat = settings.format.parse()?;

    if verbose {
        println!("Scanning for files in {}...", settings.root.display());
        if !settings.excludes.is_empty() {
            let names: Vec<_> = settings.excludes.iter().collect();
            println!("Automatically excluding: {}", names.join(", "));
        }
    }

    let spinner = if verbose {
        ProgressBar::hidden()
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner.set_message("Scanning files...");
        spinner
    };

    let options = CollectOptions {
        extensions: settings.extensions.clone(),
        excludes: settings.excludes.clone(),
        follow_symlinks: settings.follow_symlinks,
    };
    let result = collect_documentation_with(&settings.root, options, |path, count| {
        if verbose {
            println!("Found {} comments in {}", count, path.display());
        }
    });
    spinner.finish_and_clear();
    let result = result?;

    let document = render(&result.fragments, format);
    write_atomically(&settings.output, &document)?;

    println!(
        "{} Documentation generated in {}",
        "✓".green(),
        settings.output.display().to_string().cyan()
    );
    println!(
        "Found {} doc comments in {} files",
        result.fragment_count(),
        result.files_with_comments
    );
    println!("Total files processed: {}", result.files_processed);

    if result.fragment_count() == 0 {
        eprintln!("\n{} No doc comments found. Check:", "⚠ Warning:".yellow());
        eprintln!("  - Extensions match your sources ({})", settings.extensions.join(","));
        eprintln!("  - Paths are not excluded by .gitignore or the default exclusions");
        eprintln!("  - Comments use /** ... */ or // * style");
    }

    Ok(())
}

/// Writes via a sibling temp file so a failed write never leaves a
/// half-written document behind.
fn write_atomically(path: &Path, contents: &str) -> Result<()> {
    let mut tmp_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "documentation".into());
    tmp_name.push(".tmp");
    let tmp_path: PathBuf = path.with_file_name(tmp_name);

    fs::write(&tmp_path, contents)?;
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(e.into());
    }
    Ok(())
}
