//! HTTP router construction.
//!
//! Assembles all Axum routes and middleware into a single `Router`.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::api;
use crate::config::Config;
use crate::state::AppState;

/// Build the application router with all routes and middleware.
pub fn build_router(state: Arc<AppState>, config: &Config) -> Router {
    let cors = match config.server.cors_origin.as_str() {
        "*" => CorsLayer::permissive(),
        origin => match origin.parse::<HeaderValue>() {
            Ok(value) => CorsLayer::new().allow_origin(AllowOrigin::exact(value)),
            Err(_) => {
                tracing::warn!("Invalid CORS_ORIGIN '{origin}' — falling back to permissive");
                CorsLayer::permissive()
            }
        },
    };

    Router::new()
        .route("/health", get(api::health::health))
        .route("/chunks", get(api::documents::list_chunks))
        .route(
            "/upload",
            post(api::documents::upload)
                .layer(DefaultBodyLimit::max(config.storage.max_upload_mb * 1024 * 1024)),
        )
        .layer(cors)
        .with_state(state)
}
