//! Append-only chunk persistence.
//!
//! The chunk collection is a flat ordered list of `{source, text}` records:
//! loaded fully into memory, appended to, rewritten fully. [`append_chunks`]
//! owns the merge logic; where the records live is the [`ChunkStore`]
//! implementor's concern (JSON file, in-memory, database, ...).

mod json;
mod memory;

pub use json::JsonChunkStore;
pub use memory::MemoryChunkStore;


use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Corrupt chunk store: {0}")]
    Corrupt(String),
    #[error("Serialization error: {0}")]
    Serialize(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One chunk of extracted text tagged with the upload it came from.
///
/// `source` is the original filename and is not unique across uploads —
/// re-uploading the same file appends a fresh set of records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub source: String,
    pub text: String,
}

/// Backing storage for the chunk collection.
///
/// Implementations load the whole collection and rewrite it whole; the
/// accumulator never streams or partially writes.
pub trait ChunkStore {
    fn load(&self) -> Result<Vec<ChunkRecord>, StoreError>;
    fn save(&self, records: &[ChunkRecord]) -> Result<(), StoreError>;
}

/// Append `new_chunks` tagged with `source_id` to the persisted collection.
///
/// Prior records are preserved untouched; new records land after them in
/// arrival order. Returns the number of chunks just appended, not the total
/// collection size.
///
/// The read-modify-write here is last-write-wins on the full rewrite, so
/// concurrent callers against the same store can lose each other's updates.
/// Callers hold a single writer at a time.
pub fn append_chunks(
    store: &dyn ChunkStore,
    source_id: &str,
    new_chunks: &[String],
) -> Result<usize, StoreError> {
    let mut records = store.load()?;

    for chunk in new_chunks {
        records.push(ChunkRecord {
            source: source_id.to_string(),
            text: chunk.clone(),
        });
    }

    store.save(&records)?;
    tracing::info!(
        "Appended {} chunks from '{}' ({} records total)",
        new_chunks.len(),
        source_id,
        records.len()
    );
    Ok(new_chunks.len())
}
