//! Actions raised by widgets during a frame.

use catalog_core::ViewAction;

/// Actions collected while widgets are laid out, drained once per frame.
#[derive(Debug, Default)]
pub struct ActionQueue {
    pending: Vec<ViewAction>,
}

impl ActionQueue {
    pub fn push(&mut self, action: ViewAction) {
        self.pending.push(action);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn drain(&mut self) -> impl Iterator<Item = ViewAction> + '_ {
        self.pending.drain(..)
    }
}
