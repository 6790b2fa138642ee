//! CLI entry-point for annotating document snapshots.

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use futures::stream::{self, StreamExt};
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument};

use crate::{assertion::AssertionEngine, config::Settings};

use super::{collect_inputs, load_document, relative_to_input};

/// Args for the `classify` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Document snapshot, or a directory of `.json` snapshots.
    #[arg(long)]
    pub input: PathBuf,
    /// Directory receiving annotated snapshots; stdout when omitted.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let engine = Arc::new(AssertionEngine::new(&settings)?);
    let inputs = collect_inputs(&args.input)?;
    info!(documents = inputs.len(), "classifying documents");

    let mut annotated = stream::iter(inputs)
        .map(|path| {
            let engine = Arc::clone(&engine);
            async move {
                let mut doc = load_document(&path).await?;
                let doc = tokio::task::spawn_blocking(move || {
                    engine.annotate(&mut doc).map(|()| doc)
                })
                .await?
                .with_context(|| format!("annotate {}", path.display()))?;
                let json = doc.to_json_pretty()?;
                Ok::<_, anyhow::Error>((path, json))
            }
        })
        .buffer_unordered(settings.max_concurrent_documents.max(1))
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;
    annotated.sort_by(|a, b| a.0.cmp(&b.0));

    match &args.output {
        Some(dir) => {
            for (path, json) in &annotated {
                let target = dir.join(relative_to_input(&args.input, path));
                if let Some(parent) = target.parent() {
                    tokio::fs::create_dir_all(parent)
                        .await
                        .with_context(|| format!("create {}", parent.display()))?;
                }
                tokio::fs::write(&target, json)
                    .await
                    .with_context(|| format!("write {}", target.display()))?;
            }
            info!(output = %dir.display(), "annotated documents written");
        }
        None => {
            let mut stdout = tokio::io::stdout();
            for (_, json) in &annotated {
                stdout.write_all(json.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
            }
            stdout.flush().await?;
        }
    }
    Ok(())
}
