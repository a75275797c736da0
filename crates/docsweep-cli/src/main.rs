//! Docsweep CLI - Command-line interface for Docsweep
//!
//! Scans a project for doc comments and writes them out as a single
//! Markdown document.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;

use config::CliOverrides;

#[derive(Parser)]
#[command(name = "docsweep")]
#[command(author = "Docsweep Contributors")]
#[command(version)]
#[command(about = "Collect doc comments from a project into one document", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Display more information during processing
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    extract: ExtractArgs,
}

#[derive(clap::Args)]
struct ExtractArgs {
    /// Root directory of the project
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Output file path [default: documentation.md]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format [default: markdown]
    #[arg(short, long)]
    format: Option<String>,

    /// Comma-separated list of file extensions to process [default: .js,.jsx,.ts,.tsx]
    #[arg(short, long)]
    extensions: Option<String>,

    /// Additional directory names to always skip (repeatable)
    #[arg(short = 'x', long)]
    exclude: Vec<String>,

    /// Don't skip node_modules, .git, dist, build and coverage by default
    #[arg(long)]
    no_default_excludes: bool,

    /// Follow symbolic links when walking directories
    #[arg(long)]
    follow_symlinks: bool,

    /// JSON config file [default: <root>/docsweep.json if present]
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default docsweep.json into a project
    Init {
        /// Project root (defaults to current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging. Progress goes to stdout, logs to stderr. The
    // `docsweep` directive covers every docsweep_* crate by prefix.
    let filter = if cli.verbose {
        "warn,docsweep=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let result = match cli.command {
        Some(Commands::Init { path }) => commands::init(&path),
        None => {
            let args = cli.extract;
            let overrides = CliOverrides {
                output: args.output,
                format: args.format,
                extensions: args.extensions,
                exclude: args.exclude,
                no_default_excludes: args.no_default_excludes,
                follow_symlinks: args.follow_symlinks,
            };
            commands::extract(&args.root, args.config.as_deref(), overrides, cli.verbose)
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
