//! One browsing session: the shared dataset, the view-state store and the view
//! model derived from them, kept in sync on every dispatch.

use std::sync::Arc;

use crate::{
    dataset::Dataset,
    presentation::CatalogView,
    view_state::{ViewAction, ViewState, ViewStateStore},
};

pub struct CatalogSession {
    dataset: Arc<Dataset>,
    store: ViewStateStore,
    view: CatalogView,
}

impl CatalogSession {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self::with_state(dataset, ViewState::default())
    }

    pub fn with_state(dataset: Arc<Dataset>, state: ViewState) -> Self {
        let view = CatalogView::build(&dataset, &state);
        Self {
            dataset,
            store: ViewStateStore::with_state(state),
            view,
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn state(&self) -> &ViewState {
        self.store.state()
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    /// Applies `action` and recomputes the view when the state changed.
    pub fn dispatch(&mut self, action: ViewAction) -> bool {
        let changed = self.store.dispatch(action);
        if changed {
            self.view = CatalogView::build(&self.dataset, self.store.state());
            tracing::debug!(visible = self.view.visible_count(), "catalog view recomputed");
        }
        changed
    }

    pub fn dispatch_all(&mut self, actions: impl IntoIterator<Item = ViewAction>) -> bool {
        actions
            .into_iter()
            .fold(false, |changed, action| self.dispatch(action) || changed)
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
