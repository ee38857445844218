//! SQLite-backed store using turso: one database file per `DB_NAME`, with a
//! `roasts` table and a `status_checks` table.
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use tokio::fs;
use tokio::sync::Mutex;
use turso::{Builder, Connection};

use crate::error::{AppError, AppResult};
use crate::models::{RoastResponse, StatusCheck};
use crate::store::RoastStore;

const SCHEMA: [&str; 2] = [
    "CREATE TABLE IF NOT EXISTS roasts (
        id INTEGER PRIMARY KEY,
        roast TEXT NOT NULL,
        name TEXT NOT NULL,
        category TEXT NOT NULL,
        timestamp TEXT NOT NULL
    )",
    "CREATE TABLE IF NOT EXISTS status_checks (
        seq INTEGER PRIMARY KEY,
        id TEXT NOT NULL,
        client_name TEXT NOT NULL,
        timestamp TEXT NOT NULL
    )",
];

pub struct DatabaseStore {
    path: PathBuf,
    // `None` once closed. The lock also keeps turso's connection single-user.
    conn: Mutex<Option<Connection>>,
}

impl DatabaseStore {
    pub async fn open(root: impl AsRef<Path>, db_name: &str) -> AppResult<Self> {
        let root = root.as_ref();
        fs::create_dir_all(root).await?;
        let path = root.join(format!("{}.db", db_name));
        tracing::info!("[DB] Opening database at {}", path.display());

        let db = Builder::new_local(&path.to_string_lossy()).build().await?;
        let conn = db.connect()?;
        for statement in SCHEMA.iter() {
            conn.execute(statement, ()).await?;
        }

        Ok(DatabaseStore { path, conn: Mutex::new(Some(conn)) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn closed() -> AppError {
    AppError::Store("database store is closed".to_string())
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn parse_timestamp(raw: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|e| AppError::Store(format!("bad timestamp '{}': {}", raw, e)))
}

#[async_trait]
impl RoastStore for DatabaseStore {
    async fn insert_roast(&self, roast: &RoastResponse) -> AppResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(closed)?;
        conn.execute(
            "INSERT INTO roasts (roast, name, category, timestamp) VALUES (?, ?, ?, ?)",
            [
                roast.roast.clone(),
                roast.name.clone(),
                roast.category.clone(),
                format_timestamp(&roast.timestamp),
            ],
        )
        .await?;
        Ok(())
    }

    async fn recent_roasts(&self, limit: usize) -> AppResult<Vec<RoastResponse>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(closed)?;
        let query = format!(
            "SELECT roast, name, category, timestamp FROM roasts ORDER BY id DESC LIMIT {}",
            limit
        );
        let mut rows = conn.query(&query, ()).await?;

        let mut roasts = Vec::new();
        while let Some(row) = rows.next().await? {
            let timestamp: String = row.get(3)?;
            roasts.push(RoastResponse {
                roast: row.get(0)?,
                name: row.get(1)?,
                category: row.get(2)?,
                timestamp: parse_timestamp(&timestamp)?,
            });
        }
        roasts.reverse();
        Ok(roasts)
    }

    async fn insert_status(&self, status: &StatusCheck) -> AppResult<()> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(closed)?;
        conn.execute(
            "INSERT INTO status_checks (id, client_name, timestamp) VALUES (?, ?, ?)",
            [status.id.clone(), status.client_name.clone(), format_timestamp(&status.timestamp)],
        )
        .await?;
        Ok(())
    }

    async fn list_status(&self, limit: usize) -> AppResult<Vec<StatusCheck>> {
        let guard = self.conn.lock().await;
        let conn = guard.as_ref().ok_or_else(closed)?;
        let query = format!(
            "SELECT id, client_name, timestamp FROM status_checks ORDER BY seq ASC LIMIT {}",
            limit
        );
        let mut rows = conn.query(&query, ()).await?;

        let mut checks = Vec::new();
        while let Some(row) = rows.next().await? {
            let timestamp: String = row.get(2)?;
            checks.push(StatusCheck {
                id: row.get(0)?,
                client_name: row.get(1)?,
                timestamp: parse_timestamp(&timestamp)?,
            });
        }
        Ok(checks)
    }

    async fn close(&self) -> AppResult<()> {
        if self.conn.lock().await.take().is_some() {
            tracing::info!("[DB] Closed database at {}", self.path.display());
        }
        Ok(())
    }
}
