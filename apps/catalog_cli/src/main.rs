use std::{path::PathBuf, sync::Arc};

mod render;
mod script;

use anyhow::{Context, Result};
use catalog_core::CatalogSession;
use clap::{Parser, ValueEnum};

use crate::script::Step;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Replays catalog interactions headlessly and prints the resulting view.
#[derive(Parser, Debug)]
struct Args {
    /// Directory holding users.json, categories.json and products.json.
    #[arg(long)]
    fixtures_dir: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,
    /// Interactions applied in order, e.g. `owner:Anna search:fru header:id header:id`.
    steps: Vec<Step>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = catalog_core::config::load_settings();
    if args.fixtures_dir.is_some() {
        settings.fixtures_dir = args.fixtures_dir;
    }

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(std::io::stderr)
        .init();

    let dataset = catalog_core::load_dataset(settings.fixtures_dir.as_deref())
        .context("failed to load catalog fixtures")?;
    let mut session = CatalogSession::new(Arc::new(dataset));
    let step_count = args.steps.len();
    let changed = session.dispatch_all(args.steps.into_iter().map(|Step(action)| action));
    tracing::debug!(steps = step_count, changed, "replayed catalog interactions");

    let view = session.view();
    match args.format {
        OutputFormat::Table => print!("{}", render::render_text(view)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view.rows)?),
    }

    Ok(())
}
