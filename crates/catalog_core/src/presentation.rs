//! Toolkit-independent view model. Renderers (egui, text) only read from it and
//! turn clicks back into [`ViewAction`]s.

use serde::Serialize;
use shared::domain::{CategoryId, EnrichedProduct, ProductId, Sex};

use crate::{
    dataset::Dataset,
    pipeline::derive_visible,
    view_state::{
        OwnerFilter, SortColumn, SortDirection, ViewAction, ViewState, ALL_OWNERS_LABEL,
    },
};

pub const ALL_CATEGORIES_LABEL: &str = "All";
pub const NO_MATCHES_MESSAGE: &str = "No products matching selected criteria";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerLink {
    pub label: String,
    pub filter: OwnerFilter,
    pub active: bool,
}

impl OwnerLink {
    pub fn action(&self) -> ViewAction {
        ViewAction::SelectOwner(self.filter.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBox {
    pub query: String,
    pub show_clear: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChip {
    /// `None` for the "All" chip.
    pub category_id: Option<CategoryId>,
    pub icon: String,
    pub title: String,
    pub active: bool,
}

impl CategoryChip {
    pub fn action(&self) -> ViewAction {
        match self.category_id {
            Some(id) => ViewAction::ToggleCategory(id),
            None => ViewAction::SelectAllCategories,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Neutral,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn for_column(column: SortColumn, state: &ViewState) -> Self {
        match (state.sort_key, state.sort_direction) {
            (Some(key), SortDirection::Asc) if key == column => Self::Ascending,
            (Some(key), SortDirection::Desc) if key == column => Self::Descending,
            _ => Self::Neutral,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Neutral => "⇅",
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnHeader {
    pub column: SortColumn,
    pub indicator: SortIndicator,
}

impl ColumnHeader {
    pub fn title(&self) -> &'static str {
        self.column.title()
    }

    pub fn action(&self) -> ViewAction {
        ViewAction::ActivateHeader(self.column)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RowView {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub user: String,
    pub user_sex: Sex,
}

impl From<&EnrichedProduct> for RowView {
    fn from(row: &EnrichedProduct) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
            category: row.category_label(),
            user: row.user.name.clone(),
            user_sex: row.user.sex,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The dataset itself holds no products.
    NoProducts,
    /// Products exist but the current filters exclude all of them.
    NoMatches,
}

impl EmptyState {
    pub fn message(self) -> &'static str {
        NO_MATCHES_MESSAGE
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogView {
    pub owner_links: Vec<OwnerLink>,
    pub search: SearchBox,
    pub category_chips: Vec<CategoryChip>,
    /// Omitted when nothing is visible.
    pub header: Option<Vec<ColumnHeader>>,
    pub rows: Vec<RowView>,
    pub empty: Option<EmptyState>,
}

impl CatalogView {
    pub fn build(dataset: &Dataset, state: &ViewState) -> Self {
        let visible = derive_visible(dataset.rows(), state);

        let mut owner_links = Vec::with_capacity(dataset.users().len() + 1);
        owner_links.push(OwnerLink {
            label: ALL_OWNERS_LABEL.to_string(),
            filter: OwnerFilter::All,
            active: state.owner == OwnerFilter::All,
        });
        owner_links.extend(dataset.users().iter().map(|user| OwnerLink {
            label: user.name.clone(),
            filter: OwnerFilter::Named(user.name.clone()),
            active: matches!(&state.owner, OwnerFilter::Named(name) if *name == user.name),
        }));

        let mut category_chips = Vec::with_capacity(dataset.categories().len() + 1);
        category_chips.push(CategoryChip {
            category_id: None,
            icon: String::new(),
            title: ALL_CATEGORIES_LABEL.to_string(),
            active: state.categories.is_empty(),
        });
        category_chips.extend(dataset.categories().iter().map(|category| CategoryChip {
            category_id: Some(category.id),
            icon: category.icon.clone(),
            title: category.title.clone(),
            active: state.categories.contains(&category.id),
        }));

        let empty = if !visible.is_empty() {
            None
        } else if dataset.is_empty() {
            Some(EmptyState::NoProducts)
        } else {
            Some(EmptyState::NoMatches)
        };

        let header = empty.is_none().then(|| {
            SortColumn::ALL
                .iter()
                .map(|&column| ColumnHeader {
                    column,
                    indicator: SortIndicator::for_column(column, state),
                })
                .collect()
        });

        Self {
            owner_links,
            search: SearchBox {
                query: state.search_query.clone(),
                show_clear: !state.search_query.is_empty(),
            },
            category_chips,
            header,
            rows: visible.into_iter().map(RowView::from).collect(),
            empty,
        }
    }

    pub fn visible_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
#[path = "tests/presentation_tests.rs"]
mod tests;
