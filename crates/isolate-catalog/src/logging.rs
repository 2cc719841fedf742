//! Tracing subscriber setup for binaries embedding the catalog.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::CatalogError;

/// Install a fmt subscriber. `RUST_LOG` wins over the configured filter.
pub fn init_logging(config: &LoggingConfig) -> Result<(), CatalogError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.filter).map_err(|e| CatalogError::Logging(e.to_string()))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CatalogError::Logging(e.to_string()))
}
