use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{ChunkRecord, ChunkStore, StoreError};

/// In-memory chunk store for tests and embedded callers.
#[derive(Debug, Default)]
pub struct MemoryChunkStore {
    records: Mutex<Vec<ChunkRecord>>,
}

impl MemoryChunkStore {
    pub fn new() -> Self {
        Self::default()
    }

    // A panic while holding the lock leaves the records in whatever state
    // the last completed save produced, which is still a valid collection,
    // so a poisoned lock is recovered rather than propagated.
    fn records(&self) -> MutexGuard<'_, Vec<ChunkRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ChunkStore for MemoryChunkStore {
    fn load(&self) -> Result<Vec<ChunkRecord>, StoreError> {
        Ok(self.records().clone())
    }

    fn save(&self, records: &[ChunkRecord]) -> Result<(), StoreError> {
        *self.records() = records.to_vec();
        Ok(())
    }
}
