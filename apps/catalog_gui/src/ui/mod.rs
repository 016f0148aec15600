//! UI layer for the catalog window: app shell, panels and theme.

pub mod app;
pub mod panels;
pub mod theme;

pub use app::CatalogApp;
