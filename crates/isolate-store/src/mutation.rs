//! Create/update/delete notifications applied copy-on-write to a snapshot.

use serde::{Deserialize, Serialize};

use isolate_domain::{
    Cave, Collection, EntityId, Host, Institution, Isolate, Location, Method, Organism, Sample,
    SamplingPoint,
};

use crate::store::{EntityStore, Stored, Table, Tables};

/// A single row of any table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "table", content = "row", rename_all = "snake_case")]
pub enum Row {
    Organism(Organism),
    Sample(Sample),
    Host(Host),
    Method(Method),
    Location(Location),
    Cave(Cave),
    SamplingPoint(SamplingPoint),
    Institution(Institution),
    Collection(Collection),
    Isolate(Isolate),
}

impl Row {
    pub fn table(&self) -> Table {
        match self {
            Row::Organism(_) => Table::Organisms,
            Row::Sample(_) => Table::Samples,
            Row::Host(_) => Table::Hosts,
            Row::Method(_) => Table::Methods,
            Row::Location(_) => Table::Locations,
            Row::Cave(_) => Table::Caves,
            Row::SamplingPoint(_) => Table::SamplingPoints,
            Row::Institution(_) => Table::Institutions,
            Row::Collection(_) => Table::Collections,
            Row::Isolate(_) => Table::Isolates,
        }
    }
}

/// A change notification from the surrounding application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StoreMutation {
    /// Create, or replace the row with the same id.
    Upsert(Row),
    /// Remove the row with this id.
    Delete { table: Table, id: EntityId },
}

impl EntityStore {
    /// Produce the next snapshot with `mutations` applied in order.
    ///
    /// `self` is untouched; readers holding it keep a consistent view.
    pub fn apply(&self, mutations: &[StoreMutation]) -> EntityStore {
        let mut tables = self.tables().clone();
        for mutation in mutations {
            match mutation {
                StoreMutation::Upsert(row) => upsert_row(&mut tables, row.clone()),
                StoreMutation::Delete { table, id } => delete_row(&mut tables, *table, *id),
            }
        }
        let next = self.successor(tables);
        tracing::debug!(
            generation = next.generation(),
            mutations = mutations.len(),
            "applied store mutations"
        );
        next
    }
}

fn upsert_row(tables: &mut Tables, row: Row) {
    match row {
        Row::Organism(r) => upsert(tables, r),
        Row::Sample(r) => upsert(tables, r),
        Row::Host(r) => upsert(tables, r),
        Row::Method(r) => upsert(tables, r),
        Row::Location(r) => upsert(tables, r),
        Row::Cave(r) => upsert(tables, r),
        Row::SamplingPoint(r) => upsert(tables, r),
        Row::Institution(r) => upsert(tables, r),
        Row::Collection(r) => upsert(tables, r),
        Row::Isolate(r) => upsert(tables, r),
    }
}

fn upsert<T: Stored>(tables: &mut Tables, row: T) {
    let rows = T::rows_mut(tables);
    match rows.iter_mut().find(|existing| existing.key() == row.key()) {
        Some(existing) => *existing = row,
        None => rows.push(row),
    }
}

fn delete_row(tables: &mut Tables, table: Table, id: EntityId) {
    let removed = match table {
        Table::Organisms => delete::<Organism>(tables, id),
        Table::Samples => delete::<Sample>(tables, id),
        Table::Hosts => delete::<Host>(tables, id),
        Table::Methods => delete::<Method>(tables, id),
        Table::Locations => delete::<Location>(tables, id),
        Table::Caves => delete::<Cave>(tables, id),
        Table::SamplingPoints => delete::<SamplingPoint>(tables, id),
        Table::Institutions => delete::<Institution>(tables, id),
        Table::Collections => delete::<Collection>(tables, id),
        Table::Isolates => delete::<Isolate>(tables, id),
    };
    if !removed {
        tracing::debug!(table = table.name(), id, "delete of unknown id ignored");
    }
}

fn delete<T: Stored>(tables: &mut Tables, id: EntityId) -> bool {
    let rows = T::rows_mut(tables);
    let before = rows.len();
    rows.retain(|row| row.key() != id);
    rows.len() != before
}
