//! Generation transfer objects
//!
//! `GenerationCreate` requires every field; `GenerationPatch` makes every
//! field optional and only the ones present are written.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::Generation;

/// Create generation request
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationCreate {
    pub photo_id: i32,
    pub description: String,
    pub tags: Vec<String>,
    pub style: String,
    pub length: String,
    pub tags_count: i32,
}

/// Partial update request
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenerationPatch {
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub style: Option<String>,
    pub length: Option<String>,
    pub tags_count: Option<i32>,
}

impl GenerationPatch {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.tags.is_none()
            && self.style.is_none()
            && self.length.is_none()
            && self.tags_count.is_none()
    }
}

/// Generation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationOut {
    pub id: i32,
    pub photo_id: i32,
    pub description: String,
    pub tags: Vec<String>,
    pub style: String,
    pub length: String,
    pub tags_count: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Generation> for GenerationOut {
    fn from(g: Generation) -> Self {
        Self {
            id: g.id,
            photo_id: g.photo_id,
            description: g.description,
            tags: g.tags,
            style: g.style,
            length: g.length,
            tags_count: g.tags_count,
            created_at: g.created_at,
        }
    }
}

/// `POST /generate` response
///
/// `generated_image` is part of the contract but never populated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationResponse {
    pub description: String,
    pub tags: Vec<String>,
    pub generated_image: Option<Vec<u8>>,
}

impl GenerationResponse {
    pub fn new(description: String, tags: Vec<String>) -> Self {
        Self {
            description,
            tags,
            generated_image: None,
        }
    }
}
