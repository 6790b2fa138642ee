//! CLI entry-point for exporting labeled feature vectors.

use std::{path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use futures::stream::{self, StreamExt};
use tracing::{info, instrument};

use crate::{
    assertion::{AssertionEngine, GenericFeatures, SubjectFeatures},
    config::Settings,
    document::Document,
};

use super::{collect_inputs, load_document, relative_to_input};

/// Args for the `features` sub-command.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Document snapshot, or a directory of `.json` snapshots.
    #[arg(long)]
    pub input: PathBuf,
    /// CSV file to create.
    #[arg(long)]
    pub output: PathBuf,
}

fn header() -> Vec<String> {
    let mut header: Vec<String> = ["document", "mention", "begin", "end", "text"]
        .into_iter()
        .map(String::from)
        .collect();
    header.extend(
        GenericFeatures::default()
            .labeled()
            .keys()
            .map(|name| format!("generic_{name}")),
    );
    header.extend(
        SubjectFeatures::default()
            .labeled()
            .keys()
            .map(|name| format!("subject_{name}")),
    );
    header
}

/// One CSV record per mention of `doc`.
fn records(engine: &AssertionEngine, doc: &Document, name: &str) -> crate::Result<Vec<Vec<String>>> {
    let mut records = Vec::new();
    for (id, mention) in doc.mentions() {
        let generic = engine.extract_generic_features(doc, id)?;
        let subject = engine.extract_subject_features(doc, id)?;
        let mut record = vec![
            name.to_string(),
            id.0.to_string(),
            mention.span.begin().to_string(),
            mention.span.end().to_string(),
            doc.covered_text(mention.span).to_string(),
        ];
        record.extend(generic.labeled().values().map(ToString::to_string));
        record.extend(subject.labeled().values().map(ToString::to_string));
        records.push(record);
    }
    Ok(records)
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let engine = Arc::new(AssertionEngine::new(&settings)?);
    let inputs = collect_inputs(&args.input)?;
    let documents = inputs.len();

    let mut extracted = stream::iter(inputs)
        .map(|path| {
            let engine = Arc::clone(&engine);
            let name = relative_to_input(&args.input, &path)
                .to_string_lossy()
                .into_owned();
            async move {
                let doc = load_document(&path).await?;
                let rows = tokio::task::spawn_blocking({
                    let name = name.clone();
                    move || records(&engine, &doc, &name)
                })
                .await?
                .with_context(|| format!("extract features from {}", path.display()))?;
                Ok::<_, anyhow::Error>((name, rows))
            }
        })
        .buffer_unordered(settings.max_concurrent_documents.max(1))
        .collect::<Vec<_>>()
        .await
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;
    extracted.sort_by(|a, b| a.0.cmp(&b.0));

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("create {}", args.output.display()))?;
    writer.write_record(header())?;
    let mut rows = 0usize;
    for record in extracted.iter().flat_map(|(_, records)| records) {
        writer.write_record(record)?;
        rows += 1;
    }
    writer.flush()?;

    info!(documents, rows, output = %args.output.display(), "features exported");
    Ok(())
}
