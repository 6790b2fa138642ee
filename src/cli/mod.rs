//! Command-line interface wiring for clinical-assertion.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use walkdir::WalkDir;

use crate::{config::Settings, document::Document};

pub mod classify;
pub mod features;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Clinical concept assertion classifier", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Classify(args) => classify::run(args, settings).await,
            Commands::Features(args) => features::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Annotate mentions with generic, subject, status, and polarity attributes.
    Classify(classify::Args),
    /// Export generic and subject feature vectors as CSV.
    Features(features::Args),
}

/// JSON documents named by `input`: the file itself, or every `.json` file below a directory.
pub(crate) fn collect_inputs(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }
    if !input.is_dir() {
        bail!("input {} does not exist", input.display());
    }
    let mut paths = Vec::new();
    for entry in WalkDir::new(input) {
        let entry = entry.with_context(|| format!("walk {}", input.display()))?;
        if entry.file_type().is_file()
            && entry.path().extension().and_then(|s| s.to_str()) == Some("json")
        {
            paths.push(entry.into_path());
        }
    }
    paths.sort();
    Ok(paths)
}

/// Location of `path` below the `input` root; a single-file input keeps its file name.
pub(crate) fn relative_to_input(input: &Path, path: &Path) -> PathBuf {
    match path.strip_prefix(input) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative.to_path_buf(),
        _ => path
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| path.to_path_buf()),
    }
}

/// Read and validate one document snapshot.
pub(crate) async fn load_document(path: &Path) -> Result<Document> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("read {}", path.display()))?;
    Document::from_json(&raw).with_context(|| format!("parse {}", path.display()))
}
