use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::AppResult;
use crate::models::{RoastResponse, StatusCheck};
use crate::store::RoastStore;

/// Process-local store, mainly for development and tests.
#[derive(Default)]
pub struct MemoryStore {
    roasts: RwLock<Vec<RoastResponse>>,
    status_checks: RwLock<Vec<StatusCheck>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn roast_count(&self) -> usize {
        self.roasts.read().await.len()
    }
}

#[async_trait]
impl RoastStore for MemoryStore {
    async fn insert_roast(&self, roast: &RoastResponse) -> AppResult<()> {
        self.roasts.write().await.push(roast.clone());
        Ok(())
    }

    async fn recent_roasts(&self, limit: usize) -> AppResult<Vec<RoastResponse>> {
        let roasts = self.roasts.read().await;
        let skip = roasts.len().saturating_sub(limit);
        Ok(roasts[skip..].to_vec())
    }

    async fn insert_status(&self, status: &StatusCheck) -> AppResult<()> {
        self.status_checks.write().await.push(status.clone());
        Ok(())
    }

    async fn list_status(&self, limit: usize) -> AppResult<Vec<StatusCheck>> {
        Ok(self.status_checks.read().await.iter().take(limit).cloned().collect())
    }
}
