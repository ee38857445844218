//! Persistence for roast records and status checks.
//!
//! The store is injected into the API state as `Arc<dyn RoastStore>`; the
//! backend is picked from the `STORE_URL` connection string at startup.
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{AppError, AppResult};
use crate::models::{RoastResponse, StatusCheck};

pub mod database;
pub mod memory;

pub use database::DatabaseStore;
pub use memory::MemoryStore;

#[async_trait]
pub trait RoastStore: Send + Sync {
    async fn insert_roast(&self, roast: &RoastResponse) -> AppResult<()>;

    /// The most recent `limit` roasts, oldest first.
    async fn recent_roasts(&self, limit: usize) -> AppResult<Vec<RoastResponse>>;

    async fn insert_status(&self, status: &StatusCheck) -> AppResult<()>;

    /// The first `limit` status checks, oldest first.
    async fn list_status(&self, limit: usize) -> AppResult<Vec<StatusCheck>>;

    /// Release backend resources at shutdown. Later calls fail.
    async fn close(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Open a store from a connection string.
///
/// `memory://` gives a process-local store; anything else is treated as a
/// directory (an optional `file://` prefix is stripped) holding one SQLite
/// database file per `db_name`.
pub async fn connect(url: &str, db_name: &str) -> AppResult<Arc<dyn RoastStore>> {
    if db_name.trim().is_empty() {
        return Err(AppError::Config("DB_NAME must not be empty".to_string()));
    }
    if url.starts_with("memory://") {
        tracing::info!("Using in-memory store for database '{}'", db_name);
        return Ok(Arc::new(MemoryStore::new()));
    }
    let root = url.strip_prefix("file://").unwrap_or(url);
    if root.trim().is_empty() {
        return Err(AppError::Config("STORE_URL must not be empty".to_string()));
    }
    let store = DatabaseStore::open(root, db_name).await?;
    Ok(Arc::new(store))
}
