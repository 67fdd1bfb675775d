//! Liveness endpoint
//!
//! Answers from startup state only; neither the database nor the completion
//! API is contacted.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

/// Body of `GET /health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// Layout of `generations.tags` picked at startup
    pub tags_storage: &'static str,
    /// Language generated descriptions are written in
    pub language: String,
}

impl HealthResponse {
    fn ok(state: &AppState) -> Self {
        Self {
            status: "ok",
            service: "photogen",
            version: env!("CARGO_PKG_VERSION"),
            tags_storage: state.tags.storage().as_str(),
            language: state.language.clone(),
        }
    }
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(&state))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
