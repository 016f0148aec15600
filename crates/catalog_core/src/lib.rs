//! Catalog browsing core: fixture loading, the product join, view state, the
//! derivation pipeline and the toolkit-independent view model.

use std::path::Path;

pub mod config;
pub mod dataset;
pub mod error;
pub mod fixtures;
pub mod pipeline;
pub mod presentation;
pub mod session;
pub mod view_state;

pub use dataset::Dataset;
pub use error::{CatalogError, FixtureError};
pub use fixtures::FixtureSet;
pub use pipeline::derive_visible;
pub use presentation::{CatalogView, EmptyState, SortIndicator};
pub use session::CatalogSession;
pub use view_state::{
    OwnerFilter, SortColumn, SortDirection, ViewAction, ViewState, ViewStateStore,
};

/// Loads fixtures (embedded, or from `fixtures_dir` when given) and joins them.
pub fn load_dataset(fixtures_dir: Option<&Path>) -> Result<Dataset, CatalogError> {
    let fixtures = match fixtures_dir {
        Some(dir) => FixtureSet::from_dir(dir)?,
        None => FixtureSet::embedded()?,
    };
    Ok(Dataset::from_fixtures(fixtures)?)
}

#[cfg(test)]
mod test_support;
