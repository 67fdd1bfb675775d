//! Photo transfer objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::db::Photo;

/// Create photo request
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PhotoCreate {
    pub file_path: String,
}

/// Photo response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoOut {
    pub id: i32,
    pub file_path: String,
    pub created_at: DateTime<Utc>,
}

impl From<Photo> for PhotoOut {
    fn from(p: Photo) -> Self {
        Self {
            id: p.id,
            file_path: p.file_path,
            created_at: p.created_at,
        }
    }
}
