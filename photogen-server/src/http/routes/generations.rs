//! Generation endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use super::DeletedResponse;
use crate::db::GenerationRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;
use crate::models::{GenerationCreate, GenerationOut, GenerationPatch, Pagination, PaginationParams};

/// POST /generations - create a generation for an existing photo
async fn create_generation(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerationCreate>,
) -> Result<Json<GenerationOut>, ApiError> {
    let generation = GenerationRepo::new(&state.pool, state.tags.as_ref())
        .create(&req)
        .await?;

    Ok(Json(GenerationOut::from(generation)))
}

/// GET /generations - list generations, newest first
async fn list_generations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<GenerationOut>>, ApiError> {
    let generations = GenerationRepo::new(&state.pool, state.tags.as_ref())
        .list(Pagination::from(params))
        .await?;

    let out = generations.into_iter().map(GenerationOut::from).collect();
    Ok(Json(out))
}

/// GET /generations/{id} - get a single generation
async fn get_generation(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<GenerationOut>, ApiError> {
    let generation = GenerationRepo::new(&state.pool, state.tags.as_ref())
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Generation", id))?;

    Ok(Json(GenerationOut::from(generation)))
}

/// PUT /generations/{id} - update the fields present in the body
async fn update_generation(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
    Json(patch): Json<GenerationPatch>,
) -> Result<Json<GenerationOut>, ApiError> {
    let generation = GenerationRepo::new(&state.pool, state.tags.as_ref())
        .update(id, &patch)
        .await?
        .ok_or_else(|| ApiError::not_found("Generation", id))?;

    Ok(Json(GenerationOut::from(generation)))
}

/// DELETE /generations/{id}
async fn delete_generation(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<DeletedResponse>, ApiError> {
    if !GenerationRepo::new(&state.pool, state.tags.as_ref())
        .delete(id)
        .await?
    {
        return Err(ApiError::not_found("Generation", id));
    }

    Ok(Json(DeletedResponse::deleted()))
}

/// Generation routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generations", get(list_generations).post(create_generation))
        .route(
            "/generations/{id}",
            get(get_generation)
                .put(update_generation)
                .delete(delete_generation),
        )
}
