mod args;
mod output_format;

use std::{fs, path::Path};

use anyhow::{Context as _, Result};
use args::Args;
use clap::Parser;
use log::info;
use revision_diff::{
    ContentSchema, DiffOptions, InMemoryRevisionStore, Revision, RevisionId, compare_revisions,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let args = Args::parse();

    let level = args.verbose.log_level_filter().to_string().to_lowercase();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("revision_diff={level},{}={level}", env!("CARGO_CRATE_NAME")).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("Failed to initialise tracing")?;

    let schema_yaml = read(&args.schema_path)?;
    let schema = ContentSchema::from_yaml_str(&schema_yaml).with_context(|| {
        format!(
            "Cannot load content schema from {}",
            args.schema_path.display()
        )
    })?;
    info!(
        "Loaded {} section(s) from '{}'",
        schema.sections.len(),
        args.schema_path.display()
    );

    let before_id = RevisionId::from("before");
    let after_id = RevisionId::from("after");

    let mut store = InMemoryRevisionStore::new();
    store.insert(before_id.clone(), load_revision(&args.before_path)?);
    store.insert(after_id.clone(), load_revision(&args.after_path)?);

    let options = DiffOptions::new().with_include_unchanged_lines(args.include_unchanged_lines);
    let diffs = compare_revisions(&store, &schema, &before_id, &after_id, &options)
        .context("Failed to compare revisions")?;

    let output = args
        .format
        .render(&diffs)
        .context("Failed to render the comparison")?;
    println!("{output}");

    Ok(())
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))
}

fn load_revision(path: &Path) -> Result<Revision> {
    let contents = read(path)?;
    let revision: Revision = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse revision from {}", path.display()))?;

    info!(
        "Loaded revision {} with {} field(s) from '{}'",
        revision
            .id
            .as_ref()
            .map_or_else(|| "without id".to_owned(), ToString::to_string),
        revision.fields.len(),
        path.display()
    );

    Ok(revision)
}
