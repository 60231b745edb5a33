use std::str::FromStr;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use time::{OffsetDateTime, PrimitiveDateTime};
use tracing::debug;

use crate::bmi::repo_types::BmiRecord;
use crate::error::BmiError;

/// Size of the window served by `/history`.
pub const HISTORY_LIMIT: i64 = 10;

/// Append-only log of BMI results backed by sqlite.
#[derive(Clone)]
pub struct BmiStore {
    pool: SqlitePool,
}

impl BmiStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the database, creating the file if it does not exist yet.
    pub async fn connect(database_url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)
            .with_context(|| format!("parse database url {database_url}"))?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await
            .context("connect to database")?;
        Ok(Self::new(pool))
    }

    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .context("run migrations")?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Persists one result. The timestamp is taken here, at insertion time.
    pub async fn insert(
        &self,
        weight: f64,
        height_m: f64,
        bmi: f64,
        category: &str,
        color: &str,
    ) -> Result<BmiRecord, BmiError> {
        let now = OffsetDateTime::now_utc();
        let timestamp = PrimitiveDateTime::new(now.date(), now.time());
        self.insert_at(weight, height_m, bmi, category, color, timestamp)
            .await
    }

    async fn insert_at(
        &self,
        weight: f64,
        height_m: f64,
        bmi: f64,
        category: &str,
        color: &str,
        timestamp: PrimitiveDateTime,
    ) -> Result<BmiRecord, BmiError> {
        let mut tx = self.pool.begin().await?;
        let record = sqlx::query_as::<_, BmiRecord>(
            r#"
            INSERT INTO bmi_results (weight, height, bmi, category, color, timestamp)
            VALUES (?, ?, ?, ?, ?, ?)
            RETURNING id, weight, height, bmi, category, color, timestamp
            "#,
        )
        .bind(weight)
        .bind(height_m)
        .bind(bmi)
        .bind(category)
        .bind(color)
        .bind(timestamp)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;

        debug!(id = record.id, bmi = record.bmi, "bmi result stored");
        Ok(record)
    }

    /// Most recent first; equal timestamps are ordered by id, newest first.
    pub async fn list_recent(&self, limit: i64) -> Result<Vec<BmiRecord>, BmiError> {
        // sqlite reads a negative LIMIT as "no limit"
        if limit <= 0 {
            return Ok(Vec::new());
        }
        let rows = sqlx::query_as::<_, BmiRecord>(
            r#"
            SELECT id, weight, height, bmi, category, color, timestamp
            FROM bmi_results
            ORDER BY timestamp DESC, id DESC
            LIMIT ?
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    #[cfg(test)]
    pub(crate) async fn in_memory() -> Self {
        // every sqlite memory connection is its own database, so pin the pool to one
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .expect("in-memory sqlite");
        let store = Self::new(pool);
        store.migrate().await.expect("migrations apply");
        store
    }
}
