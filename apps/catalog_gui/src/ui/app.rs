use std::sync::Arc;

use catalog_core::{CatalogSession, Dataset};
use eframe::egui;

use crate::{
    controller::{
        queue::ActionQueue,
        reducer::{apply_actions, resync_search_draft},
    },
    ui::panels::{show_filters_panel, show_product_table},
};

pub struct CatalogApp {
    session: CatalogSession,
    actions: ActionQueue,
    /// Raw text box contents; resynced only when the stored query no longer
    /// corresponds to it (clear, reset).
    search_draft: String,
}

impl CatalogApp {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            session: CatalogSession::new(dataset),
            actions: ActionQueue::default(),
            search_draft: String::new(),
        }
    }
}

impl eframe::App for CatalogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let view = self.session.view();

        egui::TopBottomPanel::top("filters_panel").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading("Product Categories");
            ui.add_space(8.0);
            show_filters_panel(ui, view, &mut self.search_draft, &mut self.actions);
            ui.add_space(8.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            show_product_table(ui, view, &mut self.actions);
        });

        if apply_actions(&mut self.session, &mut self.actions) {
            resync_search_draft(&mut self.search_draft, &self.session.state().search_query);
            ctx.request_repaint();
        }
    }
}
