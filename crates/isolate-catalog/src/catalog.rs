//! Catalog facade producing snapshot-consistent views.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use isolate_domain::{EntityId, Isolate};
use isolate_facets::{ActiveFacets, FacetCount, FacetEngine, FilterSelection};
use isolate_stats::{aggregate_counts, CountSeries};
use isolate_store::{resolve_all, EntityStore, ResolvedIsolate, StoreMutation};
use isolate_taxonomy::{build_taxonomy_tree_named, rows_for, TaxonomyNode};

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::snapshot::SnapshotCell;

/// Everything the presentation layer renders for one selection.
///
/// All fields derive from the same snapshot generation.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub generation: u64,
    /// Active facet arity of the selection
    pub active_categories: usize,
    /// Joined rows of the isolates that passed the filter, in input order
    pub isolates: Vec<ResolvedIsolate>,
    /// Ids of the isolates that passed the filter
    pub filtered_ids: Vec<EntityId>,
    /// Per-option counts over the unfiltered collection
    pub facet_counts: Vec<FacetCount>,
    /// Taxonomy of the filtered isolates
    pub taxonomy: TaxonomyNode,
    /// Count series of the filtered isolates
    pub counts: CountSeries,
}

/// The catalog: a snapshot cell plus configuration.
#[derive(Debug)]
pub struct Catalog {
    snapshots: SnapshotCell,
    config: CatalogConfig,
}

impl Catalog {
    pub fn new(store: EntityStore, config: CatalogConfig) -> Self {
        Self {
            snapshots: SnapshotCell::new(store),
            config,
        }
    }

    /// Build a catalog from a JSON snapshot string.
    pub fn from_json(json: &str, config: CatalogConfig) -> Result<Self, CatalogError> {
        Ok(Self::new(EntityStore::from_json(json)?, config))
    }

    /// Read a JSON snapshot file.
    pub fn from_path(path: &Path, config: CatalogConfig) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json, config)?;
        tracing::info!(
            "Loaded snapshot from {:?}: {} isolates, {} reference rows",
            path,
            catalog.snapshot().isolates().len(),
            catalog.snapshot().reference_row_count()
        );
        Ok(catalog)
    }

    /// Open the snapshot named by the configuration.
    pub fn open(config: CatalogConfig) -> Result<Self, CatalogError> {
        config.validate()?;
        let path = config.snapshot_path.clone().ok_or(CatalogError::NoSnapshot)?;
        Self::from_path(&path, config)
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<EntityStore> {
        self.snapshots.load()
    }

    /// Apply create/update/delete notifications. Returns the new generation.
    pub fn notify(&self, mutations: &[StoreMutation]) -> u64 {
        self.snapshots.apply(mutations).generation()
    }

    /// Swap in a freshly fetched snapshot. Returns the new generation.
    pub fn replace(&self, store: EntityStore) -> u64 {
        self.snapshots.replace(store)
    }

    /// Compute a full view for a selection against one snapshot.
    pub fn view(&self, selection: &FilterSelection) -> CatalogView {
        let snapshot = self.snapshot();
        let _span = tracing::debug_span!("catalog_view", generation = snapshot.generation()).entered();
        build_view(&snapshot, selection, &self.config.taxonomy.root_name)
    }
}

/// Derive a view from one snapshot.
pub fn build_view(store: &EntityStore, selection: &FilterSelection, root_name: &str) -> CatalogView {
    let isolates = store.isolates();
    let resolved = resolve_all(isolates, store);

    let engine = FacetEngine::from_store(store);
    let active: ActiveFacets = engine.partition(selection);
    let positions = engine.apply_positions(selection, isolates, &resolved);
    let facet_counts = engine.facet_counts(isolates, &resolved);

    let kept: Vec<&Isolate> = positions.iter().map(|&i| &isolates[i]).collect();
    let filtered_ids: Vec<EntityId> = kept.iter().map(|i| i.id).collect();
    let kept_resolved: Vec<ResolvedIsolate> = positions.iter().filter_map(|&i| resolved.get(i).cloned()).collect();

    let taxonomy = build_taxonomy_tree_named(&rows_for(kept.iter().copied(), store), root_name);
    let counts = aggregate_counts(kept.iter().copied(), store);

    CatalogView {
        generation: store.generation(),
        active_categories: active.arity(),
        isolates: kept_resolved,
        filtered_ids,
        facet_counts,
        taxonomy,
        counts,
    }
}
