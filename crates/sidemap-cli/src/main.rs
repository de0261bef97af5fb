#![forbid(unsafe_code)]

//! Sidemap CLI
//!
//! Command-line inspection and validation for sidebar manifests.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use sidemap::{has_errors, validate, Manifest, ManifestStats};

/// Sidebar manifest inspection and validation
#[derive(Parser, Debug)]
#[command(name = "sidemap")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a manifest and report diagnostics
    Validate {
        /// Path to the manifest JSON file
        file: PathBuf,
    },
    /// List every doc id in render order
    Docs {
        /// Path to the manifest JSON file
        file: PathBuf,
    },
    /// List every link as label<TAB>href
    Links {
        /// Path to the manifest JSON file
        file: PathBuf,
    },
    /// Print sidebar statistics
    Stats {
        /// Path to the manifest JSON file
        file: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let ok = match args.command {
        Command::Validate { file } => cmd_validate(&file)?,
        Command::Docs { file } => {
            cmd_docs(&file)?;
            true
        }
        Command::Links { file } => {
            cmd_links(&file)?;
            true
        }
        Command::Stats { file } => {
            cmd_stats(&file)?;
            true
        }
    };

    Ok(if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Validate the manifest, printing every diagnostic.
///
/// Returns `Ok(false)` when any diagnostic is an error; warnings alone pass.
fn cmd_validate(file: &Path) -> Result<bool> {
    let json = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let value: serde_json::Value = serde_json::from_str(&json)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;

    let diagnostics = validate(&value);
    for diagnostic in &diagnostics {
        println!("{diagnostic}");
    }

    if has_errors(&diagnostics) {
        let count = diagnostics.iter().filter(|d| d.is_error()).count();
        eprintln!("{}: {count} error(s)", file.display());
        return Ok(false);
    }

    tracing::debug!(file = %file.display(), "manifest is valid");
    println!("{}: ok", file.display());
    Ok(true)
}

fn cmd_docs(file: &Path) -> Result<()> {
    let manifest = load(file)?;
    for doc in manifest.doc_ids() {
        println!("{doc}");
    }
    Ok(())
}

fn cmd_links(file: &Path) -> Result<()> {
    let manifest = load(file)?;
    for link in manifest.links() {
        println!("{}\t{}", link.label, link.href);
    }
    Ok(())
}

fn cmd_stats(file: &Path) -> Result<()> {
    let manifest = load(file)?;
    print!("{}", format_stats(&manifest.stats()));
    Ok(())
}

fn load(file: &Path) -> Result<Manifest> {
    Manifest::load(file).with_context(|| format!("failed to load {}", file.display()))
}

fn format_stats(stats: &ManifestStats) -> String {
    format!(
        "sidebars:   {}\ndocs:       {}\ncategories: {}\nlinks:      {}\nmax depth:  {}\n",
        stats.sidebars, stats.docs, stats.categories, stats.links, stats.max_depth
    )
}

// ============================================================================
// Tests
// ============================================================================
