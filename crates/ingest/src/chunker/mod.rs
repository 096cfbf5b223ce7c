//! Fixed-size overlapping word-window chunking.
//!
//! Splits extracted text into windows of `chunk_size` whitespace-delimited
//! tokens, each window starting `chunk_size - overlap` tokens after the
//! previous one, rejoined with single spaces for downstream embedding.

mod types;

pub use types::{ChunkConfig, ChunkError};

#[cfg(test)]
mod tests;

/// Split `text` into overlapping word windows.
///
/// Tokens are whitespace runs per `split_whitespace`, so leading/trailing
/// whitespace is ignored and empty or whitespace-only input yields an empty
/// vec (zero chunks, not one empty chunk). Every chunk except possibly the
/// last holds exactly `chunk_size` tokens; the last holds whatever remains.
///
/// Fails with [`ChunkError::InvalidConfig`] unless `overlap < chunk_size` —
/// the step `chunk_size - overlap` is what guarantees the window advances.
pub fn chunk_text(text: &str, config: &ChunkConfig) -> Result<Vec<String>, ChunkError> {
    config.validate()?;

    let words: Vec<&str> = text.split_whitespace().collect();
    let step = config.chunk_size - config.overlap;

    let mut chunks = Vec::new();
    let mut start = 0;
    while start < words.len() {
        let end = usize::min(start + config.chunk_size, words.len());
        chunks.push(words[start..end].join(" "));
        start += step;
    }
    Ok(chunks)
}
