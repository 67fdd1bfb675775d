//! Photo repository

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::Pagination;

/// Photo record from database
#[derive(Debug, Clone, FromRow)]
pub struct Photo {
    pub id: i32,
    pub file_path: String,
    pub created_at: DateTime<Utc>,
}

/// Photo repository
pub struct PhotoRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PhotoRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a photo and return it with `id` and `created_at` filled in.
    pub async fn create(&self, file_path: &str) -> Result<Photo, DbError> {
        let mut tx = self.pool.begin().await?;

        let photo: Photo = sqlx::query_as(
            r#"
            INSERT INTO photos (file_path)
            VALUES ($1)
            RETURNING id, file_path, created_at
            "#,
        )
        .bind(file_path)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(photo)
    }

    /// Get a single photo by ID.
    pub async fn get(&self, id: i32) -> Result<Option<Photo>, DbError> {
        let photo = sqlx::query_as(
            r#"
            SELECT id, file_path, created_at
            FROM photos
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(photo)
    }

    /// List photos, newest first.
    pub async fn list(&self, page: Pagination) -> Result<Vec<Photo>, DbError> {
        let photos = sqlx::query_as(
            r#"
            SELECT id, file_path, created_at
            FROM photos
            ORDER BY created_at DESC, id DESC
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(page.skip)
        .bind(page.limit)
        .fetch_all(self.pool)
        .await?;

        Ok(photos)
    }

    /// Delete a photo and, through the foreign key, its generations.
    ///
    /// Returns `false` if no photo has this ID.
    pub async fn delete(&self, id: i32) -> Result<bool, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM photos WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }
}
