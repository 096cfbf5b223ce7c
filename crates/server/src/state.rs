use docslice_ingest::chunker::ChunkConfig;
use docslice_ingest::store::JsonChunkStore;
use tokio::sync::Mutex;

use crate::config::Config;

/// Shared application state.
///
/// The store sits behind a mutex: the accumulator's read-modify-write is
/// last-write-wins on a full file rewrite, so uploads serialize here to keep
/// a single writer per store.
///
/// Store I/O is synchronous `std::fs` and runs directly on the handler task
/// while the lock is held. The collection is a single flat JSON file assumed
/// small enough that this never stalls the runtime; a store too big for that
/// belongs in a different [`ChunkStore`](docslice_ingest::store::ChunkStore)
/// backend, not behind `spawn_blocking`.
pub struct AppState {
    pub store: Mutex<JsonChunkStore>,
    pub chunk_config: ChunkConfig,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            store: Mutex::new(JsonChunkStore::new(&config.storage.data_dir)),
            chunk_config: ChunkConfig::new(config.chunking.chunk_size, config.chunking.overlap),
        }
    }
}
