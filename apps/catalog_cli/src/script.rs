//! Replay steps: each one is a single user interaction, written `kind[:arg]`.

use std::str::FromStr;

use catalog_core::{view_state::UnknownSortColumn, OwnerFilter, SortColumn, ViewAction};
use shared::domain::CategoryId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step(pub ViewAction);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepParseError {
    #[error(
        "unknown step '{0}' (expected owner, all-owners, search, clear-search, \
         category, all-categories, header or reset)"
    )]
    UnknownKind(String),
    #[error("step '{0}' needs an argument, e.g. '{0}:value'")]
    MissingArgument(&'static str),
    #[error("invalid category id '{0}'")]
    InvalidCategory(String),
    #[error(transparent)]
    SortColumn(#[from] UnknownSortColumn),
}

impl FromStr for Step {
    type Err = StepParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (kind, arg) = match raw.split_once(':') {
            Some((kind, arg)) => (kind, Some(arg)),
            None => (raw, None),
        };
        let required = |name: &'static str| arg.ok_or(StepParseError::MissingArgument(name));

        let action = match kind.trim().to_ascii_lowercase().as_str() {
            "owner" => ViewAction::SelectOwner(OwnerFilter::Named(required("owner")?.to_string())),
            "all-owners" => ViewAction::SelectOwner(OwnerFilter::All),
            "search" => ViewAction::SetSearchQuery(required("search")?.to_string()),
            "clear-search" => ViewAction::ClearSearch,
            "category" => {
                let raw_id = required("category")?;
                let id = raw_id
                    .trim()
                    .parse::<i64>()
                    .map_err(|_| StepParseError::InvalidCategory(raw_id.to_string()))?;
                ViewAction::ToggleCategory(CategoryId(id))
            }
            "all-categories" => ViewAction::SelectAllCategories,
            "header" | "sort" => {
                ViewAction::ActivateHeader(required("header")?.parse::<SortColumn>()?)
            }
            "reset" => ViewAction::ResetAll,
            _ => return Err(StepParseError::UnknownKind(raw.to_string())),
        };
        Ok(Self(action))
    }
}

#[cfg(test)]
#[path = "tests/script_tests.rs"]
mod tests;
