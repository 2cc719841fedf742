use std::path::PathBuf;

use isolate_store::StoreError;

use crate::config::ConfigError;

/// Errors surfaced by the catalog facade.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Snapshot error: {0}")]
    Store(#[from] StoreError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No snapshot path configured")]
    NoSnapshot,

    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}
