//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Every write runs in its own transaction (rollback on early return)
//! - Lists are ordered newest first and sliced with OFFSET/LIMIT
//! - `get` returns `None` and `delete` returns `false` for missing rows

pub mod generations;
pub mod logs;
pub mod photos;

pub use generations::{Generation, GenerationRepo};
pub use logs::{Log, LogRepo};
pub use photos::{Photo, PhotoRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// A foreign key points at a row that does not exist
    #[error("{resource} '{id}' does not exist")]
    InvalidReference { resource: &'static str, id: String },

    #[error("tags encoding error: {0}")]
    Codec(#[from] serde_json::Error),

    /// `generations.tags` exists with a type neither codec reads
    #[error("unsupported generations.tags column type '{0}'")]
    UnsupportedTagsColumn(String),
}

/// Map a foreign-key violation onto `InvalidReference`, pass anything else through.
pub(crate) fn reference_error(err: sqlx::Error, resource: &'static str, id: i32) -> DbError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
            DbError::InvalidReference {
                resource,
                id: id.to_string(),
            }
        }
        _ => DbError::Sqlx(err),
    }
}
