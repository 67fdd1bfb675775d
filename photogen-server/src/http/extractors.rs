//! Custom Axum extractors

use axum::extract::{FromRequest, FromRequestParts, Multipart, Path, Request};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::completion::ImageInput;
use crate::models::ValidationError;

/// Form defaults, matching what a bare upload gets
pub const DEFAULT_STYLE: &str = "Default";
pub const DEFAULT_LENGTH: &str = "Medium";
pub const DEFAULT_TAGS_COUNT: i32 = 5;

/// Extract and validate an integer record ID from path
pub struct ValidId(pub i32);

impl<S> FromRequestParts<S> for ValidId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| missing("id"))?;

        let id = raw.parse::<i32>().map_err(|_| {
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "id",
                value: raw.clone(),
            })
        })?;

        Ok(Self(id))
    }
}

/// Multipart body of `POST /generate`
///
/// Fields: `image` (file, required), `style`, `length`, `tags_count`.
/// Unknown fields are ignored. The image's declared media type is checked
/// before its bytes are read.
#[derive(Debug)]
pub struct GenerateForm {
    pub image: ImageInput,
    pub style: String,
    pub length: String,
    pub tags_count: i32,
}

impl<S> FromRequest<S> for GenerateForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state).await.map_err(|e| {
            ApiError::Validation(ValidationError::Malformed {
                reason: e.body_text(),
            })
        })?;

        let mut image = None;
        let mut style = DEFAULT_STYLE.to_string();
        let mut length = DEFAULT_LENGTH.to_string();
        let mut tags_count = DEFAULT_TAGS_COUNT;

        while let Some(field) = multipart.next_field().await.map_err(malformed)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "image" => {
                    let content_type = field.content_type().unwrap_or_default().to_string();
                    if !content_type.starts_with("image/") {
                        return Err(ApiError::bad_request("an image file is required"));
                    }
                    let bytes = field.bytes().await.map_err(malformed)?;
                    image = Some(ImageInput::new(content_type, bytes.to_vec()));
                }
                "style" => style = field.text().await.map_err(malformed)?,
                "length" => length = field.text().await.map_err(malformed)?,
                "tags_count" => {
                    let raw = field.text().await.map_err(malformed)?;
                    tags_count = raw.trim().parse().map_err(|_| {
                        ApiError::Validation(ValidationError::InvalidFormat {
                            field: "tags_count",
                            value: raw.clone(),
                        })
                    })?;
                }
                other => tracing::debug!(field = other, "ignoring unknown form field"),
            }
        }

        let image = image.ok_or_else(|| missing("image"))?;

        Ok(Self {
            image,
            style,
            length,
            tags_count,
        })
    }
}

fn missing(field: &'static str) -> ApiError {
    ApiError::Validation(ValidationError::Missing { field })
}

fn malformed(e: axum::extract::multipart::MultipartError) -> ApiError {
    ApiError::Validation(ValidationError::Malformed {
        reason: e.body_text(),
    })
}
