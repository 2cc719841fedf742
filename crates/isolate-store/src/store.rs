//! Immutable entity snapshots.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use isolate_domain::{
    Cave, Collection, EntityId, Host, Institution, Isolate, Location, Method, Organism, ReferenceEntity,
    Sample, SamplingPoint,
};

use crate::error::StoreError;
use crate::index::TableIndex;

/// Names every table held by a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Organisms,
    Samples,
    Hosts,
    Methods,
    Locations,
    Caves,
    SamplingPoints,
    Institutions,
    Collections,
    Isolates,
}

impl Table {
    pub fn name(&self) -> &'static str {
        match self {
            Table::Organisms => "organisms",
            Table::Samples => "samples",
            Table::Hosts => "hosts",
            Table::Methods => "methods",
            Table::Locations => "locations",
            Table::Caves => "caves",
            Table::SamplingPoints => "sampling_points",
            Table::Institutions => "institutions",
            Table::Collections => "collections",
            Table::Isolates => "isolates",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw table rows as fetched from the data source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tables {
    pub organisms: Vec<Organism>,
    pub samples: Vec<Sample>,
    pub hosts: Vec<Host>,
    pub methods: Vec<Method>,
    pub locations: Vec<Location>,
    pub caves: Vec<Cave>,
    pub sampling_points: Vec<SamplingPoint>,
    pub institutions: Vec<Institution>,
    pub collections: Vec<Collection>,
    pub isolates: Vec<Isolate>,
}

impl Tables {
    /// Total number of reference rows (everything but isolates).
    pub fn reference_row_count(&self) -> usize {
        self.organisms.len()
            + self.samples.len()
            + self.hosts.len()
            + self.methods.len()
            + self.locations.len()
            + self.caves.len()
            + self.sampling_points.len()
            + self.institutions.len()
            + self.collections.len()
    }
}

/// Memoized id indices for one snapshot.
#[derive(Debug, Clone)]
pub struct StoreIndices {
    pub organisms: TableIndex,
    pub samples: TableIndex,
    pub hosts: TableIndex,
    pub methods: TableIndex,
    pub locations: TableIndex,
    pub caves: TableIndex,
    pub sampling_points: TableIndex,
    pub institutions: TableIndex,
    pub collections: TableIndex,
    pub isolates: TableIndex,
}

impl StoreIndices {
    fn build(tables: &Tables) -> Self {
        fn ids<T: Stored>(rows: &[T]) -> impl Iterator<Item = EntityId> + '_ {
            rows.iter().map(Stored::key)
        }

        Self {
            organisms: TableIndex::build("organisms", ids(&tables.organisms)),
            samples: TableIndex::build("samples", ids(&tables.samples)),
            hosts: TableIndex::build("hosts", ids(&tables.hosts)),
            methods: TableIndex::build("methods", ids(&tables.methods)),
            locations: TableIndex::build("locations", ids(&tables.locations)),
            caves: TableIndex::build("caves", ids(&tables.caves)),
            sampling_points: TableIndex::build("sampling_points", ids(&tables.sampling_points)),
            institutions: TableIndex::build("institutions", ids(&tables.institutions)),
            collections: TableIndex::build("collections", ids(&tables.collections)),
            isolates: TableIndex::build("isolates", ids(&tables.isolates)),
        }
    }
}

/// A row type that lives in one snapshot table.
pub trait Stored: Clone + Sized {
    const TABLE: Table;

    fn key(&self) -> EntityId;
    fn rows(tables: &Tables) -> &[Self];
    fn rows_mut(tables: &mut Tables) -> &mut Vec<Self>;
    fn index(indices: &StoreIndices) -> &TableIndex;
}

macro_rules! stored {
    ($ty:ty, $table:expr, $field:ident, |$row:ident| $key:expr) => {
        impl Stored for $ty {
            const TABLE: Table = $table;

            fn key(&self) -> EntityId {
                let $row = self;
                $key
            }

            fn rows(tables: &Tables) -> &[Self] {
                &tables.$field
            }

            fn rows_mut(tables: &mut Tables) -> &mut Vec<Self> {
                &mut tables.$field
            }

            fn index(indices: &StoreIndices) -> &TableIndex {
                &indices.$field
            }
        }
    };
    ($ty:ty, $table:expr, $field:ident) => {
        stored!($ty, $table, $field, |row| ReferenceEntity::id(row));
    };
}

stored!(Organism, Table::Organisms, organisms);
stored!(Sample, Table::Samples, samples);
stored!(Host, Table::Hosts, hosts);
stored!(Method, Table::Methods, methods);
stored!(Location, Table::Locations, locations);
stored!(Cave, Table::Caves, caves);
stored!(SamplingPoint, Table::SamplingPoints, sampling_points);
stored!(Institution, Table::Institutions, institutions);
stored!(Collection, Table::Collections, collections);
stored!(Isolate, Table::Isolates, isolates, |row| row.id);

/// An immutable snapshot of all reference tables and isolates.
///
/// Lookups go through id indices that are built on first use and live as
/// long as the snapshot. Snapshots are never edited in place, so an index
/// can never go stale.
#[derive(Debug, Clone)]
pub struct EntityStore {
    tables: Tables,
    generation: u64,
    captured_at: DateTime<Utc>,
    indices: OnceLock<StoreIndices>,
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::from_tables(Tables::default())
    }
}

impl EntityStore {
    /// Wrap fetched tables in a snapshot (generation 0).
    pub fn from_tables(tables: Tables) -> Self {
        Self {
            tables,
            generation: 0,
            captured_at: Utc::now(),
            indices: OnceLock::new(),
        }
    }

    pub fn builder() -> StoreBuilder {
        StoreBuilder::default()
    }

    /// Decode a snapshot from a JSON object keyed by table name.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let tables: Tables = serde_json::from_str(json)?;
        Ok(Self::from_tables(tables))
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        serde_json::to_string_pretty(&self.tables).map_err(|e| StoreError::Encode(e.to_string()))
    }

    /// Same tables, explicit generation.
    pub fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    pub fn into_tables(self) -> Tables {
        self.tables
    }

    pub fn isolates(&self) -> &[Isolate] {
        &self.tables.isolates
    }

    pub fn reference_row_count(&self) -> usize {
        self.tables.reference_row_count()
    }

    /// The memoized indices, built on first call.
    pub fn indices(&self) -> &StoreIndices {
        self.indices.get_or_init(|| {
            tracing::debug!(
                generation = self.generation,
                reference_rows = self.tables.reference_row_count(),
                isolates = self.tables.isolates.len(),
                "building snapshot indices"
            );
            StoreIndices::build(&self.tables)
        })
    }

    /// All rows of one table.
    pub fn rows<T: Stored>(&self) -> &[T] {
        T::rows(&self.tables)
    }

    /// Look up a row by id.
    pub fn get<T: Stored>(&self, id: EntityId) -> Option<&T> {
        T::index(self.indices()).get(T::rows(&self.tables), id)
    }

    fn get_opt<T: Stored>(&self, id: Option<EntityId>) -> Option<&T> {
        id.and_then(|id| self.get::<T>(id))
    }

    pub fn isolate(&self, id: EntityId) -> Option<&Isolate> {
        self.get(id)
    }

    pub fn organism_of(&self, isolate: &Isolate) -> Option<&Organism> {
        self.get_opt(isolate.organism_id)
    }

    pub fn sample_of(&self, isolate: &Isolate) -> Option<&Sample> {
        self.get_opt(isolate.sample_id)
    }

    pub fn host_of(&self, isolate: &Isolate) -> Option<&Host> {
        self.get_opt(isolate.host_id)
    }

    pub fn method_of(&self, isolate: &Isolate) -> Option<&Method> {
        self.get_opt(isolate.method_id)
    }

    pub fn sampling_point_of(&self, isolate: &Isolate) -> Option<&SamplingPoint> {
        self.get_opt(isolate.sampling_point_id)
    }

    pub fn cave_of(&self, isolate: &Isolate) -> Option<&Cave> {
        self.get_opt(isolate.cave_id)
    }

    pub fn institution_of(&self, isolate: &Isolate) -> Option<&Institution> {
        self.get_opt(isolate.institution_id)
    }

    pub fn collection_of(&self, isolate: &Isolate) -> Option<&Collection> {
        self.get_opt(isolate.collection_id)
    }

    pub fn location_of_cave(&self, cave: &Cave) -> Option<&Location> {
        self.get_opt(cave.location_id)
    }

    /// Follows isolate → cave → location.
    pub fn location_of(&self, isolate: &Isolate) -> Option<&Location> {
        self.cave_of(isolate).and_then(|cave| self.location_of_cave(cave))
    }

    /// Successor snapshot with replaced tables.
    pub(crate) fn successor(&self, tables: Tables) -> Self {
        Self {
            tables,
            generation: self.generation + 1,
            captured_at: Utc::now(),
            indices: OnceLock::new(),
        }
    }
}

/// Incremental construction of a snapshot.
#[derive(Debug, Default)]
pub struct StoreBuilder {
    tables: Tables,
}

impl StoreBuilder {
    /// Append one row to its table.
    pub fn insert<T: Stored>(mut self, row: T) -> Self {
        T::rows_mut(&mut self.tables).push(row);
        self
    }

    /// Append many rows to their table.
    pub fn extend<T: Stored>(mut self, rows: impl IntoIterator<Item = T>) -> Self {
        T::rows_mut(&mut self.tables).extend(rows);
        self
    }

    pub fn build(self) -> EntityStore {
        EntityStore::from_tables(self.tables)
    }
}
