//! Chunker configuration and errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChunkError {
    #[error("Invalid chunk configuration: overlap ({overlap}) must be smaller than chunk_size ({chunk_size})")]
    InvalidConfig { chunk_size: usize, overlap: usize },
}

/// Configuration for the word-window chunker.
#[derive(Debug, Clone)]
pub struct ChunkConfig {
    /// Tokens per chunk (default: 500).
    pub chunk_size: usize,
    /// Tokens shared between consecutive chunks (default: 100).
    pub overlap: usize,
}

impl Default for ChunkConfig {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            overlap: 100,
        }
    }
}

impl ChunkConfig {
    pub fn new(chunk_size: usize, overlap: usize) -> Self {
        Self {
            chunk_size,
            overlap,
        }
    }

    /// The window must advance: `overlap < chunk_size`. This also rules out
    /// `chunk_size == 0`.
    pub fn validate(&self) -> Result<(), ChunkError> {
        if self.overlap >= self.chunk_size {
            return Err(ChunkError::InvalidConfig {
                chunk_size: self.chunk_size,
                overlap: self.overlap,
            });
        }
        Ok(())
    }
}
