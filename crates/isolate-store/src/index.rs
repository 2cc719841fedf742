//! Id → row position indices over snapshot tables.

use std::collections::HashMap;

use isolate_domain::EntityId;

/// Maps ids to positions in one table.
///
/// Ids are expected to be unique. When they are not, the first row wins and
/// the duplicate is reported.
#[derive(Debug, Clone, Default)]
pub struct TableIndex {
    positions: HashMap<EntityId, usize>,
    duplicates: usize,
}

impl TableIndex {
    /// Build an index from the ids of a table, in row order.
    pub fn build(table: &str, ids: impl IntoIterator<Item = EntityId>) -> Self {
        let mut positions = HashMap::new();
        let mut duplicates = 0;

        for (pos, id) in ids.into_iter().enumerate() {
            if positions.contains_key(&id) {
                duplicates += 1;
                tracing::warn!(table, id, position = pos, "duplicate id in table, keeping first row");
                continue;
            }
            positions.insert(id, pos);
        }

        Self { positions, duplicates }
    }

    /// Look up a row by id.
    pub fn get<'a, T>(&self, rows: &'a [T], id: EntityId) -> Option<&'a T> {
        self.positions.get(&id).and_then(|&pos| rows.get(pos))
    }

    pub fn position(&self, id: EntityId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Number of rows skipped because their id was already indexed.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
