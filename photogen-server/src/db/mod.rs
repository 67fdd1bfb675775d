//! Database layer - connection pool, schema, tags codec and repositories
//!
//! # Design Principles
//!
//! - One sqlx transaction per repository call: commit on success, rollback on drop
//! - Lookups return `Option`, deletes return `bool`; callers decide what "absent" means
//! - Cascades are enforced by foreign keys, not by application code

pub mod pool;
pub mod repos;
pub mod schema;
pub mod tags;

pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
pub use schema::{create_tables, prepare};
pub use sqlx::PgPool;
pub use tags::{ArrayTags, JsonTextTags, TagsCodec, TagsStorage};
