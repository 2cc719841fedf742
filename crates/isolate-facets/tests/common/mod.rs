//! Shared fixtures for facet tests.

use isolate_domain::{AccessLevel, Cave, Isolate, Location, Organism, Sample};
use isolate_store::EntityStore;

/// Reference tables with two options per category.
pub fn store() -> EntityStore {
    EntityStore::builder()
        .insert(Organism { id: 1, organism_type: "Bacteria".into() })
        .insert(Organism { id: 2, organism_type: "Fungi".into() })
        .insert(Sample { id: 1, sample_type: "Soil".into() })
        .insert(Sample { id: 2, sample_type: "Guano".into() })
        .insert(Location { id: 1, town: "Calauan".into(), province: "Laguna".into() })
        .insert(Location { id: 2, town: "Sagada".into(), province: "Mountain Province".into() })
        .insert(Cave { id: 1, cave_code: "A".into(), cave_name: "Cave A".into(), location_id: Some(1) })
        .insert(Cave { id: 2, cave_code: "B".into(), cave_name: "Cave B".into(), location_id: Some(2) })
        .build()
}

/// An isolate wired to the given reference ids.
pub fn isolate(id: i64, access: Option<AccessLevel>, cave: i64, organism: i64, sample: i64) -> Isolate {
    Isolate {
        access_level: access,
        cave_id: Some(cave),
        organism_id: Some(organism),
        sample_id: Some(sample),
        ..Isolate::new(id, format!("CCB-UPLB-{}", id), "Bacillus", "subtilis")
    }
}
