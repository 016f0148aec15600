//! Controller layer: the actions raised while drawing a frame and the reducer
//! that feeds them into the catalog session.

pub mod queue;
pub mod reducer;
