//! Tests for the word-window chunker.

use super::{chunk_text, ChunkConfig, ChunkError};

fn words(n: usize) -> String {
    (0..n).map(|i| format!("w{i}")).collect::<Vec<_>>().join(" ")
}

// ── Window arithmetic ───────────────────────────────────────────────

#[test]
fn windows_advance_by_size_minus_overlap() {
    // step = 3 - 1 = 2, so windows start at token indices 0, 2, 4.
    let chunks = chunk_text("a b c d e", &ChunkConfig::new(3, 1)).unwrap();
    assert_eq!(chunks, vec!["a b c", "c d e", "e"]);
}

#[test]
fn all_chunks_but_last_are_full_size() {
    let text = words(1237);
    let config = ChunkConfig::new(500, 100);
    let chunks = chunk_text(&text, &config).unwrap();

    let (last, full) = chunks.split_last().unwrap();
    for c in full {
        assert_eq!(c.split_whitespace().count(), 500);
    }
    let last_len = last.split_whitespace().count();
    assert!(last_len >= 1 && last_len <= 500, "last chunk had {last_len} tokens");
}

#[test]
fn short_text_produces_single_chunk() {
    let chunks = chunk_text("just a few words here", &ChunkConfig::default()).unwrap();
    assert_eq!(chunks, vec!["just a few words here"]);
}

#[test]
fn consecutive_chunks_share_overlap_tokens() {
    let text = words(20);
    let chunks = chunk_text(&text, &ChunkConfig::new(8, 3)).unwrap();
    assert!(chunks.len() >= 2);

    for pair in chunks.windows(2) {
        let prev: Vec<&str> = pair[0].split_whitespace().collect();
        let next: Vec<&str> = pair[1].split_whitespace().collect();
        let shared = usize::min(3, next.len());
        assert_eq!(&prev[prev.len() - 3..][..shared], &next[..shared]);
    }
}

#[test]
fn deoverlapped_chunks_reconstruct_token_sequence() {
    let text = "The quick brown fox jumps over the lazy dog again and again until done";
    let config = ChunkConfig::new(5, 2);
    let chunks = chunk_text(text, &config).unwrap();

    let mut rebuilt: Vec<String> = chunks[0]
        .split_whitespace()
        .map(str::to_string)
        .collect();
    for c in &chunks[1..] {
        rebuilt.extend(c.split_whitespace().skip(config.overlap).map(str::to_string));
    }

    let original: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    assert_eq!(rebuilt, original);
}

// ── Tokenization ────────────────────────────────────────────────────

#[test]
fn whitespace_runs_collapse_to_single_spaces() {
    let chunks = chunk_text("  alpha \t bravo\n\ncharlie  ", &ChunkConfig::new(10, 2)).unwrap();
    assert_eq!(chunks, vec!["alpha bravo charlie"]);
}

// ── Edge cases ──────────────────────────────────────────────────────

#[test]
fn empty_text_produces_no_chunks() {
    let chunks = chunk_text("", &ChunkConfig::default()).unwrap();
    assert!(chunks.is_empty());
}

#[test]
fn whitespace_only_text_produces_no_chunks() {
    let chunks = chunk_text("   \n\t\n   ", &ChunkConfig::default()).unwrap();
    assert!(chunks.is_empty());
}

#[test]
fn overlap_equal_to_chunk_size_is_rejected() {
    // Step would be zero: the window would never advance. Must fail fast
    // instead of looping.
    let err = chunk_text(&words(10), &ChunkConfig::new(100, 100)).unwrap_err();
    assert_eq!(
        err,
        ChunkError::InvalidConfig {
            chunk_size: 100,
            overlap: 100
        }
    );
}

#[test]
fn overlap_greater_than_chunk_size_is_rejected() {
    let err = chunk_text("a b c", &ChunkConfig::new(3, 7)).unwrap_err();
    assert!(matches!(err, ChunkError::InvalidConfig { .. }));
}

#[test]
fn zero_chunk_size_is_rejected() {
    let err = chunk_text("a b c", &ChunkConfig::new(0, 0)).unwrap_err();
    assert!(matches!(err, ChunkError::InvalidConfig { .. }));
}

#[test]
fn invalid_config_fails_even_on_empty_text() {
    // Validation runs before tokenization.
    assert!(chunk_text("", &ChunkConfig::new(5, 5)).is_err());
}

#[test]
fn zero_overlap_is_valid() {
    let chunks = chunk_text(&words(10), &ChunkConfig::new(4, 0)).unwrap();
    assert_eq!(chunks.len(), 3);
    assert_eq!(chunks[2], "w8 w9");
}

#[test]
fn default_config_is_500_by_100() {
    let config = ChunkConfig::default();
    assert_eq!(config.chunk_size, 500);
    assert_eq!(config.overlap, 100);
    assert!(config.validate().is_ok());
}
