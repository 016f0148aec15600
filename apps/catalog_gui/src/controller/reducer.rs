//! Applies queued actions to the session, in the order they were raised.

use catalog_core::{CatalogSession, ViewState};

use crate::controller::queue::ActionQueue;

/// Returns whether any action changed the view state.
pub fn apply_actions(session: &mut CatalogSession, queue: &mut ActionQueue) -> bool {
    if queue.is_empty() {
        return false;
    }
    let changed = session.dispatch_all(queue.drain());
    if changed {
        tracing::debug!(
            visible = session.view().visible_count(),
            "catalog view updated from ui actions"
        );
    }
    changed
}

/// Replaces the search box text with `query` when the stored query no longer
/// corresponds to it (after clear or reset). Typed text that normalizes to the
/// stored query is left alone. Returns whether the draft was replaced.
pub fn resync_search_draft(draft: &mut String, query: &str) -> bool {
    if ViewState::normalize_query(draft) == query {
        return false;
    }
    draft.clear();
    draft.push_str(query);
    true
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
