//! Table creation for photos, generations and logs
//!
//! Only `CREATE ... IF NOT EXISTS`; there is no migration history.

use std::sync::Arc;

use sqlx::PgPool;

use super::{DbError, TagsCodec, TagsStorage};

const INDEXES: [&str; 5] = [
    "CREATE INDEX IF NOT EXISTS idx_photos_created ON photos(created_at DESC)",
    "CREATE INDEX IF NOT EXISTS idx_generations_photo ON generations(photo_id)",
    "CREATE INDEX IF NOT EXISTS idx_generations_created ON generations(created_at DESC)",
    "CREATE INDEX IF NOT EXISTS idx_logs_generation ON logs(generation_id)",
    "CREATE INDEX IF NOT EXISTS idx_logs_created ON logs(created_at DESC)",
];

/// Resolve the tags layout, then make sure every table exists.
///
/// Fails on an existing tags column of any other type than `TEXT[]` or `TEXT`.
/// Returns the codec the repositories must use for this database.
pub async fn prepare(
    pool: &PgPool,
    preferred: TagsStorage,
) -> Result<Arc<dyn TagsCodec>, DbError> {
    let storage = TagsStorage::detect(pool, preferred).await?;
    let codec = storage.codec();
    create_tables(pool, codec.as_ref()).await?;
    Ok(codec)
}

/// Create all tables and indexes that do not exist yet.
///
/// The `generations.tags` column type comes from `codec`.
pub async fn create_tables(pool: &PgPool, codec: &dyn TagsCodec) -> Result<(), sqlx::Error> {
    tracing::info!(tags_storage = %codec.storage(), "Creating tables if absent...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS photos (
            id SERIAL PRIMARY KEY,
            file_path TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    let generations = format!(
        r#"
        CREATE TABLE IF NOT EXISTS generations (
            id SERIAL PRIMARY KEY,
            photo_id INTEGER NOT NULL REFERENCES photos(id) ON DELETE CASCADE,
            description TEXT NOT NULL,
            tags {} NOT NULL,
            style VARCHAR(50) NOT NULL,
            length VARCHAR(20) NOT NULL,
            tags_count INTEGER NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
        codec.column_type()
    );
    sqlx::query(&generations).execute(pool).await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS logs (
            id SERIAL PRIMARY KEY,
            generation_id INTEGER REFERENCES generations(id) ON DELETE CASCADE,
            level VARCHAR(20) NOT NULL,
            message TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    create_indexes(pool).await?;

    tracing::info!("Tables ready");
    Ok(())
}

async fn create_indexes(pool: &PgPool) -> Result<(), sqlx::Error> {
    for statement in INDEXES {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
