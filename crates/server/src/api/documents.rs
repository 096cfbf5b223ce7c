//! Document upload and chunk listing endpoints.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::info;

use docslice_ingest::chunker;
use docslice_ingest::document::{self, ExtractionError};
use docslice_ingest::store::{self, ChunkRecord, ChunkStore};

use crate::state::AppState;

// ── Response types ────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UploadResponse {
    pub filename: String,
    pub total_chunks: usize,
    pub chunks: Vec<String>,
}

#[derive(Serialize)]
pub struct ChunkListResponse {
    pub chunks: Vec<ChunkRecord>,
}

// ── POST /upload ──────────────────────────────────────────────────

/// Upload a document for chunking.
///
/// Accepts multipart/form-data with a single file field. The document is
/// parsed, split into overlapping word windows, and the chunks appended to
/// the persisted store tagged with the original filename.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, (StatusCode, String)> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Multipart error: {e}")))?
        .ok_or((StatusCode::BAD_REQUEST, "No file provided".to_string()))?;

    let filename = field.file_name().unwrap_or("unnamed").to_string();
    let bytes = field
        .bytes()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, format!("Failed to read file: {e}")))?;

    let doc = document::extract_text(&bytes, &filename).map_err(map_extraction_error)?;
    info!(
        "Extracted '{}' (type={}): {} chars",
        filename,
        doc.file_type,
        doc.text.len()
    );

    let chunks = chunker::chunk_text(&doc.text, &state.chunk_config)
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

    // Hold the lock across the whole read-modify-write so uploads never
    // interleave on the store file.
    let appended = {
        let store = state.store.lock().await;
        store::append_chunks(&*store, &filename, &chunks).map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Store update failed: {e}"),
            )
        })?
    };

    Ok(Json(UploadResponse {
        filename,
        total_chunks: appended,
        chunks,
    }))
}

fn map_extraction_error(e: ExtractionError) -> (StatusCode, String) {
    match e {
        ExtractionError::UnsupportedType(_) => (StatusCode::BAD_REQUEST, e.to_string()),
        ExtractionError::Pdf(_) => {
            (StatusCode::BAD_REQUEST, format!("Text extraction failed: {e}"))
        }
        ExtractionError::Ocr(_) | ExtractionError::Io(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, format!("Text extraction failed: {e}"))
        }
    }
}

// ── GET /chunks ───────────────────────────────────────────────────

/// List the persisted chunk collection in arrival order.
pub async fn list_chunks(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ChunkListResponse>, (StatusCode, String)> {
    let store = state.store.lock().await;
    let chunks = store
        .load()
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;
    Ok(Json(ChunkListResponse { chunks }))
}
