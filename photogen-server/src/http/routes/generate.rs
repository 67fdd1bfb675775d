//! `POST /generate` - describe an uploaded image and store the result

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};

use crate::completion::{parse_completion, CompletionError, PromptRequest};
use crate::db::{DbError, GenerationRepo, PhotoRepo};
use crate::http::error::ApiError;
use crate::http::extractors::GenerateForm;
use crate::http::server::AppState;
use crate::models::{GenerationCreate, GenerationResponse, Length};

/// `file_path` stored for photos created by `/generate`; the bytes are not kept.
pub const GENERATED_FILE_PATH: &str = "generated_via_openai";

/// Anything that can fail once the upload has been accepted
#[derive(Debug, thiserror::Error)]
enum GenerateError {
    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error(transparent)]
    Database(#[from] DbError),
}

/// POST /generate
async fn generate(
    State(state): State<Arc<AppState>>,
    form: GenerateForm,
) -> Result<Json<GenerationResponse>, ApiError> {
    let length = Length::coerce(&form.length);
    let instruction = PromptRequest {
        style: &form.style,
        length,
        tags_count: form.tags_count,
        language: &state.language,
    }
    .render();

    let response = describe_and_store(&state, &instruction, &form, length)
        .await
        .map_err(|e| ApiError::Generation {
            message: e.to_string(),
        })?;

    Ok(Json(response))
}

/// Call the completion service, then persist a photo and its generation.
///
/// Not transactional across the two inserts: a photo committed before a
/// failing generation insert stays.
async fn describe_and_store(
    state: &AppState,
    instruction: &str,
    form: &GenerateForm,
    length: Length,
) -> Result<GenerationResponse, GenerateError> {
    let raw = state.completion.complete(instruction, &form.image).await?;
    let mut parsed = parse_completion(&raw)?;

    if form.tags_count <= 0 {
        parsed.tags.clear();
    }

    let photo = PhotoRepo::new(&state.pool)
        .create(GENERATED_FILE_PATH)
        .await?;

    let generation = GenerationRepo::new(&state.pool, state.tags.as_ref())
        .create(&GenerationCreate {
            photo_id: photo.id,
            description: parsed.description.clone(),
            tags: parsed.tags.clone(),
            style: form.style.clone(),
            length: length.as_str().to_string(),
            tags_count: form.tags_count,
        })
        .await?;

    tracing::info!(
        photo_id = photo.id,
        generation_id = generation.id,
        tags = generation.tags.len(),
        "generation stored"
    );

    Ok(GenerationResponse::new(parsed.description, parsed.tags))
}

/// Generate routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/generate", post(generate))
}
