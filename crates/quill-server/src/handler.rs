use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use quill_posts::PostError;
use quill_types::{Envelope, HealthResponse, Post, PostDraft, PostSummary};

use crate::error::ApiError;
use crate::router::AppState;

/// Confirmation string returned by a successful save.
pub const SAVE_CONFIRMATION: &str = "post saved";
/// Confirmation string returned by a successful delete.
pub const DELETE_CONFIRMATION: &str = "post deleted";
/// Error string for any route the API does not serve.
pub const UNKNOWN_ENDPOINT: &str = "endpoint does not exist";

/// `GET /api/posts`
pub async fn list_posts(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<PostSummary>>>, ApiError> {
    let posts = state.repository.list().await?;
    Ok(Json(Envelope::ok(posts)))
}

/// `GET /api/post/:id`
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<Post>>, ApiError> {
    let post = state.repository.get(&id).await?;
    Ok(Json(Envelope::ok(post)))
}

/// `POST /api/post`
///
/// The body is parsed by hand rather than through the `Json` extractor:
/// unparseable JSON counts as an internal fault of the operation (500,
/// "operation failed: ..."), not as a 400 bad request.
pub async fn save_post(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<Envelope<String>>, ApiError> {
    let draft: PostDraft =
        serde_json::from_str(&body).map_err(|e| PostError::Internal(e.to_string()))?;
    state.repository.save(draft).await?;
    Ok(Json(Envelope::ok(SAVE_CONFIRMATION.to_string())))
}

/// `DELETE /api/post/:id`
pub async fn delete_post(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<String>>, ApiError> {
    state.repository.delete(&id).await?;
    Ok(Json(Envelope::ok(DELETE_CONFIRMATION.to_string())))
}

/// `GET /api/post/` and `DELETE /api/post/`: the id segment is empty.
pub async fn empty_post_id() -> ApiError {
    ApiError(PostError::EmptyId)
}

/// Health check handler.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::default())
}

/// Fallback for every unmatched path or method.
pub async fn unknown_endpoint() -> (StatusCode, Json<Envelope<()>>) {
    (StatusCode::NOT_FOUND, Json(Envelope::err(UNKNOWN_ENDPOINT)))
}
