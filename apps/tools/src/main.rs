use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
struct Cli {
    /// Fixture directory; the embedded fixtures are used when omitted.
    #[arg(long, global = true)]
    fixtures_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Loads and joins the fixtures, failing on any dangling reference.
    Validate,
    /// Prints the joined product rows as JSON.
    Export {
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = catalog_core::config::load_settings();
    if cli.fixtures_dir.is_some() {
        settings.fixtures_dir = cli.fixtures_dir;
    }

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .with_writer(std::io::stderr)
        .init();

    let source = settings
        .fixtures_dir
        .as_ref()
        .map_or_else(|| "embedded".to_string(), |dir| dir.display().to_string());
    let dataset = catalog_core::load_dataset(settings.fixtures_dir.as_deref())
        .with_context(|| format!("fixtures from {source} are not usable"))?;

    match cli.command {
        Command::Validate => {
            println!(
                "fixtures ok ({source}): users={} categories={} products={}",
                dataset.users().len(),
                dataset.categories().len(),
                dataset.rows().len()
            );
        }
        Command::Export { pretty } => {
            let json = if pretty {
                serde_json::to_string_pretty(dataset.rows())?
            } else {
                serde_json::to_string(dataset.rows())?
            };
            println!("{json}");
        }
    }

    Ok(())
}
