//! Environment-driven configuration.

use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_u16(key: &str, default: u16) -> u16 {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

fn env_usize(key: &str, default: usize) -> usize {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub chunking: ChunkingConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            storage: StorageConfig::from_env(),
            chunking: ChunkingConfig::from_env(),
        }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded:");
        tracing::info!(
            "  server:    host={}, port={}, cors_origin={}",
            self.server.host,
            self.server.port,
            self.server.cors_origin
        );
        tracing::info!(
            "  storage:   data_dir={}, max_upload_mb={}",
            self.storage.data_dir.display(),
            self.storage.max_upload_mb
        );
        tracing::info!(
            "  chunking:  chunk_size={}, overlap={}",
            self.chunking.chunk_size,
            self.chunking.overlap
        );
    }
}

// ── Server ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
}

impl ServerConfig {
    fn from_env() -> Self {
        Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_u16("PORT", 3001),
            cors_origin: env_or("CORS_ORIGIN", "*"),
        }
    }
}

// ── Storage ───────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the chunk store file (`chunks.json`).
    pub data_dir: PathBuf,
    pub max_upload_mb: usize,
}

impl StorageConfig {
    fn from_env() -> Self {
        Self {
            data_dir: PathBuf::from(env_or("DATA_DIR", "data")),
            max_upload_mb: env_usize("MAX_UPLOAD_MB", 100),
        }
    }
}

// ── Chunking ──────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkingConfig {
    pub chunk_size: usize,
    pub overlap: usize,
}

impl ChunkingConfig {
    fn from_env() -> Self {
        Self {
            chunk_size: env_usize("CHUNK_SIZE", 500),
            overlap: env_usize("CHUNK_OVERLAP", 100),
        }
    }
}
