//! Route handlers organized by resource

pub mod generate;
pub mod generations;
pub mod health;
pub mod photos;

use serde::Serialize;

/// Body returned by DELETE endpoints
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub status: &'static str,
}

impl DeletedResponse {
    pub fn deleted() -> Self {
        Self { status: "deleted" }
    }
}
