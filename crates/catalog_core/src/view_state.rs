//! View state and the transitions user interaction can apply to it.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use shared::domain::CategoryId;
use thiserror::Error;

pub const ALL_OWNERS_LABEL: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OwnerFilter {
    #[default]
    All,
    Named(String),
}

impl OwnerFilter {
    pub fn matches(&self, owner_name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Named(name) => name == owner_name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Id,
    Name,
    Category,
    User,
}

impl SortColumn {
    pub const ALL: [Self; 4] = [Self::Id, Self::Name, Self::Category, Self::User];

    pub fn title(self) -> &'static str {
        match self {
            Self::Id => "ID",
            Self::Name => "Product",
            Self::Category => "Category",
            Self::User => "User",
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Category => "category",
            Self::User => "user",
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort column '{0}' (expected id, name, category or user)")]
pub struct UnknownSortColumn(pub String);

impl FromStr for SortColumn {
    type Err = UnknownSortColumn;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "name" | "product" => Ok(Self::Name),
            "category" => Ok(Self::Category),
            "user" | "owner" => Ok(Self::User),
            _ => Err(UnknownSortColumn(raw.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub owner: OwnerFilter,
    /// Always stored lowercased and trimmed.
    pub search_query: String,
    /// Empty means every category is shown.
    pub categories: BTreeSet<CategoryId>,
    pub sort_key: Option<SortColumn>,
    pub sort_direction: SortDirection,
}

impl ViewState {
    pub fn normalize_query(raw: &str) -> String {
        raw.to_lowercase().trim().to_string()
    }

    /// Header click: selects `column` and flips the direction, even when the
    /// column changes.
    pub fn on_header_activate(&self, column: SortColumn) -> Self {
        Self {
            sort_key: Some(column),
            sort_direction: self.sort_direction.toggled(),
            ..self.clone()
        }
    }

    pub fn apply(&self, action: &ViewAction) -> Self {
        let mut next = self.clone();
        match action {
            ViewAction::SelectOwner(owner) => next.owner = owner.clone(),
            ViewAction::SetSearchQuery(raw) => next.search_query = Self::normalize_query(raw),
            ViewAction::ClearSearch => next.search_query.clear(),
            ViewAction::ToggleCategory(category_id) => {
                if !next.categories.remove(category_id) {
                    next.categories.insert(*category_id);
                }
            }
            ViewAction::SelectAllCategories => next.categories.clear(),
            ViewAction::SetSortKey(key) => next.sort_key = *key,
            ViewAction::ToggleSortDirection => {
                next.sort_direction = next.sort_direction.toggled();
            }
            ViewAction::ActivateHeader(column) => next = self.on_header_activate(*column),
            ViewAction::ResetAll => next = Self::default(),
        }
        next
    }
}

/// Discrete user interactions that mutate the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    SelectOwner(OwnerFilter),
    SetSearchQuery(String),
    ClearSearch,
    ToggleCategory(CategoryId),
    SelectAllCategories,
    SetSortKey(Option<SortColumn>),
    ToggleSortDirection,
    ActivateHeader(SortColumn),
    ResetAll,
}

impl ViewAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectOwner(_) => "select_owner",
            Self::SetSearchQuery(_) => "set_search_query",
            Self::ClearSearch => "clear_search",
            Self::ToggleCategory(_) => "toggle_category",
            Self::SelectAllCategories => "select_all_categories",
            Self::SetSortKey(_) => "set_sort_key",
            Self::ToggleSortDirection => "toggle_sort_direction",
            Self::ActivateHeader(_) => "activate_header",
            Self::ResetAll => "reset_all",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ViewStateStore {
    state: ViewState,
}

impl ViewStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: ViewState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Applies `action`; returns whether the state changed.
    pub fn dispatch(&mut self, action: ViewAction) -> bool {
        let next = self.state.apply(&action);
        let changed = next != self.state;
        tracing::debug!(action = action.name(), changed, "view action dispatched");
        self.state = next;
        changed
    }

    pub fn select_owner(&mut self, owner: OwnerFilter) -> bool {
        self.dispatch(ViewAction::SelectOwner(owner))
    }

    pub fn set_search_query(&mut self, raw: &str) -> bool {
        self.dispatch(ViewAction::SetSearchQuery(raw.to_string()))
    }

    pub fn clear_search(&mut self) -> bool {
        self.dispatch(ViewAction::ClearSearch)
    }

    pub fn toggle_category(&mut self, category_id: CategoryId) -> bool {
        self.dispatch(ViewAction::ToggleCategory(category_id))
    }

    pub fn select_all_categories(&mut self) -> bool {
        self.dispatch(ViewAction::SelectAllCategories)
    }

    pub fn set_sort_key(&mut self, key: Option<SortColumn>) -> bool {
        self.dispatch(ViewAction::SetSortKey(key))
    }

    pub fn toggle_sort_direction(&mut self) -> bool {
        self.dispatch(ViewAction::ToggleSortDirection)
    }

    pub fn activate_header(&mut self, column: SortColumn) -> bool {
        self.dispatch(ViewAction::ActivateHeader(column))
    }

    pub fn reset(&mut self) -> bool {
        self.dispatch(ViewAction::ResetAll)
    }
}

#[cfg(test)]
#[path = "tests/view_state_tests.rs"]
mod tests;
