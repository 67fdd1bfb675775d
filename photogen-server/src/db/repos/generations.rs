//! Generation repository
//!
//! Handles generation CRUD with:
//! - Photo existence check inside the insert transaction
//! - COALESCE-based partial update (absent fields keep their value)
//! - Tags read and written through the configured [`TagsCodec`]

use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::{reference_error, DbError};
use crate::db::TagsCodec;
use crate::models::{GenerationCreate, GenerationPatch, Pagination};

/// Generation record from database
#[derive(Debug, Clone)]
pub struct Generation {
    pub id: i32,
    pub photo_id: i32,
    pub description: String,
    pub tags: Vec<String>,
    pub style: String,
    pub length: String,
    pub tags_count: i32,
    pub created_at: DateTime<Utc>,
}

/// Generation repository
pub struct GenerationRepo<'a> {
    pool: &'a PgPool,
    codec: &'a dyn TagsCodec,
}

impl<'a> GenerationRepo<'a> {
    pub fn new(pool: &'a PgPool, codec: &'a dyn TagsCodec) -> Self {
        Self { pool, codec }
    }

    /// Insert a generation for an existing photo.
    ///
    /// Fails with [`DbError::InvalidReference`] and inserts nothing when the
    /// photo does not exist.
    pub async fn create(&self, data: &GenerationCreate) -> Result<Generation, DbError> {
        let mut tx = self.pool.begin().await?;

        let photo_exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM photos WHERE id = $1)")
                .bind(data.photo_id)
                .fetch_one(&mut *tx)
                .await?;

        if !photo_exists.0 {
            return Err(DbError::InvalidReference {
                resource: "photo",
                id: data.photo_id.to_string(),
            });
        }

        let query = sqlx::query(
            r#"
            INSERT INTO generations (photo_id, description, tags, style, length, tags_count)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, photo_id, description, tags, style, length, tags_count, created_at
            "#,
        )
        .bind(data.photo_id)
        .bind(&data.description);

        let row = self
            .codec
            .bind(query, Some(data.tags.as_slice()))?
            .bind(&data.style)
            .bind(&data.length)
            .bind(data.tags_count)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| reference_error(e, "photo", data.photo_id))?;

        let generation = self.decode_row(&row)?;
        tx.commit().await?;
        Ok(generation)
    }

    /// Get a single generation by ID.
    pub async fn get(&self, id: i32) -> Result<Option<Generation>, DbError> {
        let row = sqlx::query(
            r#"
            SELECT id, photo_id, description, tags, style, length, tags_count, created_at
            FROM generations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(|r| self.decode_row(&r)).transpose()?)
    }

    /// List generations, newest first.
    pub async fn list(&self, page: Pagination) -> Result<Vec<Generation>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT id, photo_id, description, tags, style, length, tags_count, created_at
            FROM generations
            ORDER BY created_at DESC, id DESC
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(page.skip)
        .bind(page.limit)
        .fetch_all(self.pool)
        .await?;

        rows.iter()
            .map(|r| self.decode_row(r).map_err(DbError::from))
            .collect()
    }

    /// Apply the fields present in `patch`.
    ///
    /// Returns `None` if no generation has this ID.
    pub async fn update(
        &self,
        id: i32,
        patch: &GenerationPatch,
    ) -> Result<Option<Generation>, DbError> {
        if patch.is_empty() {
            return self.get(id).await;
        }

        let mut tx = self.pool.begin().await?;

        let query = sqlx::query(
            r#"
            UPDATE generations SET
                description = COALESCE($2, description),
                tags = COALESCE($3, tags),
                style = COALESCE($4, style),
                length = COALESCE($5, length),
                tags_count = COALESCE($6, tags_count)
            WHERE id = $1
            RETURNING id, photo_id, description, tags, style, length, tags_count, created_at
            "#,
        )
        .bind(id)
        .bind(patch.description.as_deref());

        let row = self
            .codec
            .bind(query, patch.tags.as_deref())?
            .bind(patch.style.as_deref())
            .bind(patch.length.as_deref())
            .bind(patch.tags_count)
            .fetch_optional(&mut *tx)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let generation = self.decode_row(&row)?;
        tx.commit().await?;
        Ok(Some(generation))
    }

    /// Delete a generation (its logs cascade).
    ///
    /// Returns `false` if no generation has this ID.
    pub async fn delete(&self, id: i32) -> Result<bool, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM generations WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }

    fn decode_row(&self, row: &PgRow) -> Result<Generation, sqlx::Error> {
        Ok(Generation {
            id: row.try_get("id")?,
            photo_id: row.try_get("photo_id")?,
            description: row.try_get("description")?,
            tags: self.codec.decode(row, "tags")?,
            style: row.try_get("style")?,
            length: row.try_get("length")?,
            tags_count: row.try_get("tags_count")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
