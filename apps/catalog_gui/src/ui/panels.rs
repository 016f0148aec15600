//! Filter panel and product table. Widgets only read the view model and push
//! the view model's actions; nothing here mutates catalog state directly.

use catalog_core::{presentation::ColumnHeader, CatalogView, ViewAction};
use eframe::egui;

use crate::{
    controller::queue::ActionQueue,
    ui::theme,
};

pub fn show_filters_panel(
    ui: &mut egui::Ui,
    view: &CatalogView,
    search_draft: &mut String,
    actions: &mut ActionQueue,
) {
    ui.strong("Filters");
    ui.add_space(theme::CHIP_GAP);

    ui.horizontal_wrapped(|ui| {
        for link in &view.owner_links {
            if ui.selectable_label(link.active, link.label.as_str()).clicked() {
                actions.push(link.action());
            }
        }
    });
    ui.add_space(theme::SECTION_GAP);

    ui.horizontal(|ui| {
        ui.label("🔍");
        let response = ui.add(
            egui::TextEdit::singleline(search_draft)
                .hint_text("Search")
                .desired_width(280.0),
        );
        if response.changed() {
            actions.push(ViewAction::SetSearchQuery(search_draft.clone()));
        }
        if view.search.show_clear
            && ui
                .small_button("✖")
                .on_hover_text("Clear search")
                .clicked()
        {
            actions.push(ViewAction::ClearSearch);
        }
    });
    ui.add_space(theme::SECTION_GAP);

    ui.horizontal_wrapped(|ui| {
        for chip in &view.category_chips {
            let label = if chip.icon.is_empty() {
                chip.title.clone()
            } else {
                format!("{} {}", chip.icon, chip.title)
            };
            let button = egui::Button::new(label)
                .fill(theme::chip_fill(chip.active, chip.category_id.is_none()));
            if ui.add(button).clicked() {
                actions.push(chip.action());
            }
            ui.add_space(theme::CHIP_GAP);
        }
    });
    ui.add_space(theme::SECTION_GAP);

    if ui
        .add_sized([ui.available_width(), 28.0], egui::Button::new("Reset all filters"))
        .clicked()
    {
        actions.push(ViewAction::ResetAll);
    }
}

pub fn show_product_table(ui: &mut egui::Ui, view: &CatalogView, actions: &mut ActionQueue) {
    if let Some(empty) = view.empty {
        ui.label(empty.message());
    }

    let Some(header) = view.header.as_ref() else {
        return;
    };

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("product_table")
            .striped(true)
            .num_columns(header.len())
            .spacing([24.0, 6.0])
            .show(ui, |ui| {
                for column in header {
                    show_header_cell(ui, column, actions);
                }
                ui.end_row();

                for row in &view.rows {
                    ui.label(egui::RichText::new(row.id.to_string()).strong());
                    ui.label(row.name.as_str());
                    ui.label(row.category.as_str());
                    ui.colored_label(theme::owner_color(row.user_sex), row.user.as_str());
                    ui.end_row();
                }
            });
    });
}

fn show_header_cell(ui: &mut egui::Ui, column: &ColumnHeader, actions: &mut ActionQueue) {
    ui.horizontal(|ui| {
        ui.strong(column.title());
        if ui
            .small_button(column.indicator.glyph())
            .on_hover_text("Sort")
            .clicked()
        {
            actions.push(column.action());
        }
    });
}
