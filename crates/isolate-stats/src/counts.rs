//! The four count series.

use std::fmt;

use serde::{Deserialize, Serialize};

use isolate_domain::{EntityId, Isolate};
use isolate_store::EntityStore;

use crate::bucket::{BucketSeries, Tally};

/// Which series to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AggregationKind {
    Province,
    Cave,
    Organism,
    Sample,
}

impl AggregationKind {
    pub const ALL: [AggregationKind; 4] = [
        AggregationKind::Province,
        AggregationKind::Cave,
        AggregationKind::Organism,
        AggregationKind::Sample,
    ];
}

impl fmt::Display for AggregationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AggregationKind::Province => "province",
            AggregationKind::Cave => "cave",
            AggregationKind::Organism => "organism",
            AggregationKind::Sample => "sample",
        };
        f.write_str(name)
    }
}

/// All four series for one isolate collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountSeries {
    pub province: BucketSeries,
    pub cave: BucketSeries,
    pub organism: BucketSeries,
    pub sample: BucketSeries,
}

impl CountSeries {
    pub fn series(&self, kind: AggregationKind) -> &BucketSeries {
        match kind {
            AggregationKind::Province => &self.province,
            AggregationKind::Cave => &self.cave,
            AggregationKind::Organism => &self.organism,
            AggregationKind::Sample => &self.sample,
        }
    }
}

fn province_of<'s>(isolate: &Isolate, store: &'s EntityStore) -> Option<&'s str> {
    store.location_of(isolate).map(|l| l.province.as_str())
}

fn record_province<'s>(tally: &mut Tally<&'s str>, isolate: &Isolate, store: &'s EntityStore) {
    if let Some(p) = province_of(isolate, store) {
        tally.add(p, p, None);
    }
}

fn record_cave(tally: &mut Tally<EntityId>, isolate: &Isolate, store: &EntityStore) {
    if let Some(c) = store.cave_of(isolate) {
        tally.add(c.id, &c.cave_name, province_of(isolate, store));
    }
}

fn record_organism<'s>(tally: &mut Tally<&'s str>, isolate: &Isolate, store: &'s EntityStore) {
    if let Some(o) = store.organism_of(isolate) {
        tally.add(&o.organism_type, &o.organism_type, None);
    }
}

fn record_sample<'s>(tally: &mut Tally<&'s str>, isolate: &Isolate, store: &'s EntityStore) {
    if let Some(s) = store.sample_of(isolate) {
        tally.add(&s.sample_type, &s.sample_type, None);
    }
}

/// Count isolates by province, cave, organism type and sample type.
///
/// Provinces merge across locations with the same name. Caves are keyed by
/// id, labelled by name and tagged with their province when it resolves.
pub fn aggregate_counts<'a>(isolates: impl IntoIterator<Item = &'a Isolate>, store: &EntityStore) -> CountSeries {
    let mut province = Tally::new();
    let mut cave = Tally::new();
    let mut organism = Tally::new();
    let mut sample = Tally::new();
    let mut seen = 0usize;

    for isolate in isolates {
        seen += 1;
        record_province(&mut province, isolate, store);
        record_cave(&mut cave, isolate, store);
        record_organism(&mut organism, isolate, store);
        record_sample(&mut sample, isolate, store);
    }

    let counts = CountSeries {
        province: province.finish(),
        cave: cave.finish(),
        organism: organism.finish(),
        sample: sample.finish(),
    };
    tracing::debug!(
        isolates = seen,
        provinces = counts.province.len(),
        caves = counts.cave.len(),
        organisms = counts.organism.len(),
        samples = counts.sample.len(),
        "aggregated isolate counts"
    );
    counts
}

/// Compute a single series, skipping the lookups the others would need.
pub fn aggregate<'a>(
    kind: AggregationKind,
    isolates: impl IntoIterator<Item = &'a Isolate>,
    store: &EntityStore,
) -> BucketSeries {
    let isolates = isolates.into_iter();
    let series = match kind {
        AggregationKind::Province => {
            let mut tally = Tally::new();
            isolates.for_each(|i| record_province(&mut tally, i, store));
            tally.finish()
        }
        AggregationKind::Cave => {
            let mut tally = Tally::new();
            isolates.for_each(|i| record_cave(&mut tally, i, store));
            tally.finish()
        }
        AggregationKind::Organism => {
            let mut tally = Tally::new();
            isolates.for_each(|i| record_organism(&mut tally, i, store));
            tally.finish()
        }
        AggregationKind::Sample => {
            let mut tally = Tally::new();
            isolates.for_each(|i| record_sample(&mut tally, i, store));
            tally.finish()
        }
    };
    tracing::debug!(%kind, buckets = series.len(), "aggregated isolate series");
    series
}
