//! Derivation pipeline: (enriched rows, view state) → visible rows in display order.
//!
//! Stages run in a fixed order: owner filter, category filter, search filter,
//! stable sort, direction. The direction stage reverses the sorted rows when the
//! direction is [`SortDirection::Asc`] and keeps them as sorted for
//! [`SortDirection::Desc`].

use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use shared::domain::EnrichedProduct;

use crate::view_state::{SortColumn, SortDirection, ViewState};

pub fn derive_visible<'a>(
    rows: &'a [EnrichedProduct],
    state: &ViewState,
) -> Vec<&'a EnrichedProduct> {
    let mut visible: Vec<&EnrichedProduct> = rows
        .iter()
        .filter(|row| state.owner.matches(&row.user.name))
        .filter(|row| state.categories.is_empty() || state.categories.contains(&row.category.id))
        .filter(|row| matches_query(row, &state.search_query))
        .collect();

    if let Some(column) = state.sort_key {
        // `sort_by` is stable, ties keep filter order.
        visible.sort_by(|a, b| compare_by(column, a, b));
        if state.sort_direction == SortDirection::Asc {
            visible.reverse();
        }
    }

    visible
}

/// `query` is expected to be lowercased and trimmed already; empty matches all.
pub fn matches_query(row: &EnrichedProduct, query: &str) -> bool {
    query.is_empty()
        || row.name.to_lowercase().contains(query)
        || row.user.name.to_lowercase().contains(query)
        || row.category.title.to_lowercase().contains(query)
}

pub fn compare_by(column: SortColumn, a: &EnrichedProduct, b: &EnrichedProduct) -> Ordering {
    match column {
        SortColumn::Id => a.id.0.cmp(&b.id.0),
        SortColumn::Name => locale_cmp(&a.name, &b.name),
        SortColumn::Category => locale_cmp(&a.category.title, &b.category.title),
        SortColumn::User => locale_cmp(&a.user.name, &b.user.name),
    }
}

thread_local! {
    static ROOT_COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Root-locale collation (CLDR root, tertiary strength): accents and case only
/// break ties between otherwise equal letters, punctuation sorts before digits.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    ROOT_COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => folded_cmp(a, b),
    })
}

// Only reached if the compiled root collation data fails to load.
fn folded_cmp(a: &str, b: &str) -> Ordering {
    let folded = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();
    folded(a).cmp(&folded(b)).then_with(|| b.cmp(a))
}

#[cfg(test)]
#[path = "tests/pipeline_tests.rs"]
mod tests;
