//! isolate-catalog: consistent catalog views over isolate snapshots.
//!
//! Wires the engines together:
//! - [`SnapshotCell`] holds the current snapshot and swaps it atomically
//!   when the application reports a create, update or delete
//! - [`Catalog::view`] reads one snapshot and derives the joined rows, the
//!   facet-filtered subset, the taxonomy tree and the count series from it
//! - [`CatalogConfig`] loads settings from TOML
//!
//! The engines are re-exported for callers that want them individually.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod snapshot;

pub use catalog::*;
pub use config::*;
pub use error::*;
pub use logging::*;
pub use snapshot::*;

pub use isolate_domain as domain;
pub use isolate_facets::{apply_facet_filter, FacetCategory, FacetEngine, FacetUniverse, FilterSelection};
pub use isolate_stats::{aggregate_counts, AggregationBucket, CountSeries};
pub use isolate_store::{resolve_all, resolve_joins, EntityStore, ResolvedIsolate, StoreMutation};
pub use isolate_taxonomy::{build_taxonomy_tree, TaxonomyNode};
