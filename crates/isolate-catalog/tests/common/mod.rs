//! Test fixture loading utilities

use std::path::PathBuf;

use isolate_catalog::{Catalog, CatalogConfig};

/// Get the path to a fixture file
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_fixtures").join(name)
}

/// Catalog over the shared snapshot fixture
pub fn fixture_catalog() -> Catalog {
    Catalog::from_path(&fixture_path("snapshot.json"), CatalogConfig::default())
        .unwrap_or_else(|e| panic!("Failed to load fixture snapshot: {}", e))
}
