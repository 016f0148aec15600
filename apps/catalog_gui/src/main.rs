use std::{path::PathBuf, sync::Arc};

mod controller;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;

use crate::ui::CatalogApp;

#[derive(Parser, Debug)]
struct Args {
    /// Directory holding users.json, categories.json and products.json.
    #[arg(long)]
    fixtures_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut settings = catalog_core::config::load_settings();
    if args.fixtures_dir.is_some() {
        settings.fixtures_dir = args.fixtures_dir;
    }

    tracing_subscriber::fmt()
        .with_env_filter(settings.log_filter.as_str())
        .init();

    let dataset = catalog_core::load_dataset(settings.fixtures_dir.as_deref())
        .context("failed to load catalog fixtures")?;
    let dataset = Arc::new(dataset);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.as_str())
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        &settings.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(CatalogApp::new(dataset)))),
    )
    .map_err(|err| anyhow::anyhow!("catalog window failed: {err}"))
}
