//! Stub route handlers
//!
//! - GET    /api/blogs
//! - POST   /api/blogs
//! - GET    /api/blogs/:id
//! - POST   /api/blogs/:id  (requires `_method=PUT`)
//! - DELETE /api/blogs/:id
//! - GET    /api/storage/cover_images/:file
//! - GET    /health

use axum::{
    extract::{Multipart, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use super::error::{StubError, StubResult};
use super::store::{NewImage, PostResource};
use super::StubState;
use crate::api::{METHOD_OVERRIDE_FIELD, METHOD_OVERRIDE_UPDATE};
use crate::model::Envelope;

/// Fields of a create/update multipart body
#[derive(Debug, Default)]
struct PostForm {
    title: Option<String>,
    message: Option<String>,
    method: Option<String>,
    cover_image: Option<NewImage>,
}

impl PostForm {
    async fn read(mut multipart: Multipart) -> StubResult<Self> {
        let mut form = PostForm::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "title" => form.title = Some(field.text().await?),
                "message" => form.message = Some(field.text().await?),
                "cover_image" => {
                    let file_name = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field.bytes().await?;
                    // Browsers send an empty part when no file is picked.
                    if !bytes.is_empty() {
                        form.cover_image = Some(NewImage {
                            file_name,
                            content_type,
                            bytes: bytes.to_vec(),
                        });
                    }
                }
                _ if name == METHOD_OVERRIDE_FIELD => form.method = Some(field.text().await?),
                _ => {
                    tracing::debug!(field = %name, "Ignoring unknown form field");
                }
            }
        }

        Ok(form)
    }

    fn is_update(&self) -> bool {
        self.method
            .as_deref()
            .is_some_and(|m| m.trim().eq_ignore_ascii_case(METHOD_OVERRIDE_UPDATE))
    }

    /// Trimmed title and message, or the first missing field
    fn validated(&self) -> StubResult<(String, String)> {
        let title = required(self.title.as_deref(), "title")?;
        let message = required(self.message.as_deref(), "message")?;
        Ok((title, message))
    }
}

fn required(value: Option<&str>, field: &str) -> StubResult<String> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(StubError::Validation(format!(
            "The {} field is required.",
            field
        ))),
    }
}

/// Post ids are numeric; anything else cannot exist
fn parse_id(raw: &str) -> StubResult<u64> {
    raw.parse().map_err(|_| StubError::NotFound)
}

/// GET /api/blogs
pub async fn list_posts(State(state): State<Arc<StubState>>) -> Json<Envelope<Vec<PostResource>>> {
    Json(Envelope::with_data(state.store.list().await))
}

/// GET /api/blogs/:id
pub async fn get_post(
    State(state): State<Arc<StubState>>,
    Path(id): Path<String>,
) -> StubResult<Json<Envelope<PostResource>>> {
    let id = parse_id(&id)?;
    let post = state.store.get(id).await.ok_or(StubError::NotFound)?;
    Ok(Json(Envelope::with_data(post)))
}

/// POST /api/blogs
pub async fn create_post(
    State(state): State<Arc<StubState>>,
    multipart: Multipart,
) -> StubResult<(StatusCode, Json<Envelope<()>>)> {
    let form = PostForm::read(multipart).await?;
    let (title, message) = form.validated()?;

    let id = state.store.create(title, message, form.cover_image).await;
    tracing::info!(id, "Created post");

    Ok((
        StatusCode::CREATED,
        Json(Envelope::ok("Blog created successfully")),
    ))
}

/// POST /api/blogs/:id
///
/// Multipart bodies cannot travel over PUT from a browser form, so updates
/// arrive as POST carrying `_method=PUT`.
pub async fn update_post(
    State(state): State<Arc<StubState>>,
    Path(id): Path<String>,
    multipart: Multipart,
) -> StubResult<Json<Envelope<()>>> {
    let form = PostForm::read(multipart).await?;
    if !form.is_update() {
        return Err(StubError::MethodNotAllowed);
    }

    let id = parse_id(&id)?;
    let (title, message) = form.validated()?;

    if !state.store.update(id, title, message, form.cover_image).await {
        return Err(StubError::NotFound);
    }
    tracing::info!(id, "Updated post");

    Ok(Json(Envelope::ok("Blog updated successfully")))
}

/// DELETE /api/blogs/:id
pub async fn delete_post(
    State(state): State<Arc<StubState>>,
    Path(id): Path<String>,
) -> StubResult<Json<Envelope<()>>> {
    let id = parse_id(&id)?;
    if !state.store.delete(id).await {
        return Err(StubError::NotFound);
    }
    tracing::info!(id, "Deleted post");

    Ok(Json(Envelope::ok("Blog deleted successfully")))
}

/// GET /api/storage/cover_images/:file
pub async fn cover_image(
    State(state): State<Arc<StubState>>,
    Path(file): Path<String>,
) -> Response {
    match state.store.image(&file).await {
        Some(image) => (
            [(header::CONTENT_TYPE, image.content_type)],
            image.bytes,
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}
