//! Catalog domain records and the errors shared by every crate in the workspace.

pub mod domain;
pub mod error;

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
