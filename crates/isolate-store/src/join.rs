//! Join resolver: flattens an isolate's foreign keys into display fields.
//!
//! Lookups go through the snapshot's memoized id indices, so resolving N
//! isolates against R reference rows costs O(N + R).

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use isolate_domain::{AccessLevel, EntityId, Isolate, ReferenceEntity, ReferenceKind};

use crate::store::EntityStore;

/// Placeholder for any field whose reference does not resolve.
pub const UNKNOWN: &str = "Unknown";

/// An isolate with every referenced entity's display fields inlined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedIsolate {
    pub isolate_id: EntityId,
    pub accession_number: String,
    pub scientific_name: String,
    pub access_level: Option<AccessLevel>,

    pub organism_type: String,
    pub sample_type: String,
    pub host_type: String,
    pub host_genus: String,
    pub host_species: String,
    pub method_name: String,
    pub cave_code: String,
    pub cave_name: String,
    pub location_town: String,
    pub location_province: String,
    pub sampling_point: String,
    pub institution_code: String,
    pub institution_name: String,
    pub collection_code: String,
    pub collection_name: String,

    /// References that fell back to [`UNKNOWN`].
    pub unresolved: BTreeSet<ReferenceKind>,
}

impl ResolvedIsolate {
    pub fn is_resolved(&self, kind: ReferenceKind) -> bool {
        !self.unresolved.contains(&kind)
    }

    /// True when every reference resolved.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Province, if the cave → location chain resolved.
    pub fn province(&self) -> Option<&str> {
        self.resolved_field(ReferenceKind::Location, &self.location_province)
    }

    pub fn organism(&self) -> Option<&str> {
        self.resolved_field(ReferenceKind::Organism, &self.organism_type)
    }

    pub fn sample(&self) -> Option<&str> {
        self.resolved_field(ReferenceKind::Sample, &self.sample_type)
    }

    fn resolved_field<'a>(&self, kind: ReferenceKind, value: &'a str) -> Option<&'a str> {
        self.is_resolved(kind).then_some(value)
    }
}

/// Tracks which lookups fell back to the placeholder.
struct Resolution {
    unresolved: BTreeSet<ReferenceKind>,
}

impl Resolution {
    fn field<T: ReferenceEntity>(&mut self, row: Option<&T>, pick: impl Fn(&T) -> &str) -> String {
        match row {
            Some(row) => pick(row).to_string(),
            None => {
                self.unresolved.insert(T::KIND);
                UNKNOWN.to_string()
            }
        }
    }
}

/// Resolve one isolate against a snapshot. Never fails.
pub fn resolve_joins(isolate: &Isolate, store: &EntityStore) -> ResolvedIsolate {
    let mut res = Resolution {
        unresolved: BTreeSet::new(),
    };

    let organism = store.organism_of(isolate);
    let sample = store.sample_of(isolate);
    let host = store.host_of(isolate);
    let method = store.method_of(isolate);
    let cave = store.cave_of(isolate);
    let location = cave.and_then(|c| store.location_of_cave(c));
    let sampling_point = store.sampling_point_of(isolate);
    let institution = store.institution_of(isolate);
    let collection = store.collection_of(isolate);

    ResolvedIsolate {
        isolate_id: isolate.id,
        accession_number: isolate.accession_number.clone(),
        scientific_name: isolate.scientific_name(),
        access_level: isolate.access_level,

        organism_type: res.field(organism, |o| o.organism_type.as_str()),
        sample_type: res.field(sample, |s| s.sample_type.as_str()),
        host_type: res.field(host, |h| h.host_type.as_str()),
        host_genus: res.field(host, |h| h.host_genus.as_str()),
        host_species: res.field(host, |h| h.host_species.as_str()),
        method_name: res.field(method, |m| m.method_name.as_str()),
        cave_code: res.field(cave, |c| c.cave_code.as_str()),
        cave_name: res.field(cave, |c| c.cave_name.as_str()),
        location_town: res.field(location, |l| l.town.as_str()),
        location_province: res.field(location, |l| l.province.as_str()),
        sampling_point: res.field(sampling_point, |p| p.description.as_str()),
        institution_code: res.field(institution, |i| i.institution_code.as_str()),
        institution_name: res.field(institution, |i| i.institution_name.as_str()),
        collection_code: res.field(collection, |c| c.collection_code.as_str()),
        collection_name: res.field(collection, |c| c.collection_name.as_str()),

        unresolved: res.unresolved,
    }
}

/// Resolve a batch of isolates. The output is parallel to the input.
pub fn resolve_all(isolates: &[Isolate], store: &EntityStore) -> Vec<ResolvedIsolate> {
    // Build indices up front so the per-isolate loop is pure lookups.
    store.indices();

    let resolved: Vec<ResolvedIsolate> = isolates.iter().map(|iso| resolve_joins(iso, store)).collect();

    let incomplete = resolved.iter().filter(|r| !r.is_complete()).count();
    tracing::debug!(
        generation = store.generation(),
        isolates = resolved.len(),
        incomplete,
        "resolved isolate joins"
    );
    resolved
}
