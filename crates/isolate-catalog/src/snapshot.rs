//! Atomically swapped snapshot holder.

use std::sync::{Arc, PoisonError, RwLock};

use isolate_store::{EntityStore, StoreMutation};

/// Holds the current snapshot.
///
/// Readers take an `Arc` and keep a complete, unchanging snapshot for as long
/// as they need it; writers swap a whole new snapshot in. A reader can never
/// observe new isolates with old reference tables or the other way round.
#[derive(Debug)]
pub struct SnapshotCell {
    current: RwLock<Arc<EntityStore>>,
}

impl SnapshotCell {
    pub fn new(store: EntityStore) -> Self {
        Self {
            current: RwLock::new(Arc::new(store)),
        }
    }

    /// The current snapshot.
    pub fn load(&self) -> Arc<EntityStore> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn generation(&self) -> u64 {
        self.load().generation()
    }

    /// Replace the snapshot with freshly fetched tables. Returns the new generation.
    pub fn replace(&self, store: EntityStore) -> u64 {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let generation = current.generation() + 1;
        *current = Arc::new(store.with_generation(generation));
        tracing::debug!(generation, "replaced catalog snapshot");
        generation
    }

    /// Apply change notifications and swap in the result.
    pub fn apply(&self, mutations: &[StoreMutation]) -> Arc<EntityStore> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = Arc::new(current.apply(mutations));
        *current = Arc::clone(&next);
        next
    }
}

impl Default for SnapshotCell {
    fn default() -> Self {
        Self::new(EntityStore::default())
    }
}
