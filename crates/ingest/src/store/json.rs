use std::path::{Path, PathBuf};

use super::{ChunkRecord, ChunkStore, StoreError};

/// Flat JSON-file-backed chunk store at `{data_dir}/chunks.json`.
///
/// A missing file loads as an empty collection; a file that exists but does
/// not parse is [`StoreError::Corrupt`] and is never auto-repaired. Save
/// pretty-prints and overwrites the whole file (creating parent directories
/// first), so a crash mid-write can lose prior state — callers needing
/// durability wrap this in atomic-rename semantics themselves.
pub struct JsonChunkStore {
    path: PathBuf,
}

impl JsonChunkStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join("chunks.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChunkStore for JsonChunkStore {
    fn load(&self) -> Result<Vec<ChunkRecord>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = std::fs::read_to_string(&self.path)?;
        serde_json::from_str(&data)
            .map_err(|e| StoreError::Corrupt(format!("{}: {e}", self.path.display())))
    }

    fn save(&self, records: &[ChunkRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;
        std::fs::write(&self.path, data)?;
        Ok(())
    }
}
