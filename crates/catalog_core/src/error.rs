use std::path::PathBuf;

use shared::error::DataIntegrityError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("failed to read fixture file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed {name} fixture: {source}")]
    Parse {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error(transparent)]
    Fixture(#[from] FixtureError),
    #[error("fixture data integrity: {0}")]
    Integrity(#[from] DataIntegrityError),
}
