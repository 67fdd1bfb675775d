//! Photo endpoints

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use super::DeletedResponse;
use crate::db::PhotoRepo;
use crate::http::error::ApiError;
use crate::http::extractors::ValidId;
use crate::http::server::AppState;
use crate::models::{Pagination, PaginationParams, PhotoCreate, PhotoOut};

/// POST /photos - create a photo record
async fn create_photo(
    State(state): State<Arc<AppState>>,
    Json(req): Json<PhotoCreate>,
) -> Result<Json<PhotoOut>, ApiError> {
    let photo = PhotoRepo::new(&state.pool).create(&req.file_path).await?;
    Ok(Json(PhotoOut::from(photo)))
}

/// GET /photos - list photos, newest first
async fn list_photos(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> Result<Json<Vec<PhotoOut>>, ApiError> {
    let photos = PhotoRepo::new(&state.pool)
        .list(Pagination::from(params))
        .await?;

    Ok(Json(photos.into_iter().map(PhotoOut::from).collect()))
}

/// GET /photos/{id} - get a single photo
async fn get_photo(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<PhotoOut>, ApiError> {
    let photo = PhotoRepo::new(&state.pool)
        .get(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Photo", id))?;

    Ok(Json(PhotoOut::from(photo)))
}

/// DELETE /photos/{id} - delete a photo and its generations
async fn delete_photo(
    State(state): State<Arc<AppState>>,
    ValidId(id): ValidId,
) -> Result<Json<DeletedResponse>, ApiError> {
    if !PhotoRepo::new(&state.pool).delete(id).await? {
        return Err(ApiError::not_found("Photo", id));
    }

    tracing::info!(photo_id = id, "photo deleted");
    Ok(Json(DeletedResponse::deleted()))
}

/// Photo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/photos", get(list_photos).post(create_photo))
        .route("/photos/{id}", get(get_photo).delete(delete_photo))
}
