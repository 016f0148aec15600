//! Plain-text rendering of a [`CatalogView`].

use std::fmt::Write as _;

use catalog_core::{presentation::RowView, CatalogView};
use shared::domain::Sex;

const COLUMN_GAP: usize = 3;

pub fn render_text(view: &CatalogView) -> String {
    let mut out = String::new();

    let owners: Vec<String> = view
        .owner_links
        .iter()
        .map(|link| mark_active(&link.label, link.active))
        .collect();
    let _ = writeln!(out, "Owners:     {}", owners.join(" "));

    let categories: Vec<String> = view
        .category_chips
        .iter()
        .map(|chip| {
            let label = if chip.icon.is_empty() {
                chip.title.clone()
            } else {
                format!("{} {}", chip.icon, chip.title)
            };
            mark_active(&label, chip.active)
        })
        .collect();
    let _ = writeln!(out, "Categories: {}", categories.join(" "));

    if view.search.show_clear {
        let _ = writeln!(out, "Search:     \"{}\" (clear)", view.search.query);
    }
    out.push('\n');

    let Some(header) = view.header.as_ref() else {
        if let Some(empty) = view.empty {
            let _ = writeln!(out, "{}", empty.message());
        }
        return out;
    };

    let titles: Vec<String> = header
        .iter()
        .map(|column| format!("{} {}", column.title(), column.indicator.glyph()))
        .collect();
    let cells: Vec<[String; 4]> = view.rows.iter().map(row_cells).collect();

    let mut widths: Vec<usize> = titles.iter().map(|t| t.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_line(&mut out, titles.iter().map(String::as_str), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_line(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &cells {
        write_line(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn mark_active(label: &str, active: bool) -> String {
    if active {
        format!("[{label}]")
    } else {
        label.to_string()
    }
}

fn row_cells(row: &RowView) -> [String; 4] {
    let sex = match row.user_sex {
        Sex::Male => "m",
        Sex::Female => "f",
    };
    [
        row.id.to_string(),
        row.name.clone(),
        row.category.clone(),
        format!("{} ({sex})", row.user),
    ]
}

fn write_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let gap = " ".repeat(COLUMN_GAP);
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    let _ = writeln!(out, "{}", padded.join(gap.as_str()).trim_end());
}

#[cfg(test)]
#[path = "tests/render_tests.rs"]
mod tests;
