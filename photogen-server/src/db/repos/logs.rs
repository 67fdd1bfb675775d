//! Log repository
//!
//! Diagnostic records optionally tied to a generation. No HTTP route reads or
//! writes them.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::{reference_error, DbError};
use crate::models::{LogCreate, Pagination};

/// Log record from database
#[derive(Debug, Clone, FromRow)]
pub struct Log {
    pub id: i32,
    pub generation_id: Option<i32>,
    pub level: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Log repository
pub struct LogRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> LogRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, data: &LogCreate) -> Result<Log, DbError> {
        let generation_id = data.generation_id.unwrap_or_default();
        let mut tx = self.pool.begin().await?;

        let log: Log = sqlx::query_as(
            r#"
            INSERT INTO logs (generation_id, level, message)
            VALUES ($1, $2, $3)
            RETURNING id, generation_id, level, message, created_at
            "#,
        )
        .bind(data.generation_id)
        .bind(data.level.as_str())
        .bind(&data.message)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| reference_error(e, "generation", generation_id))?;

        tx.commit().await?;
        Ok(log)
    }

    /// List logs, newest first.
    pub async fn list(&self, page: Pagination) -> Result<Vec<Log>, DbError> {
        let logs = sqlx::query_as(
            r#"
            SELECT id, generation_id, level, message, created_at
            FROM logs
            ORDER BY created_at DESC, id DESC
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(page.skip)
        .bind(page.limit)
        .fetch_all(self.pool)
        .await?;

        Ok(logs)
    }
}
