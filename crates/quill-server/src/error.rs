use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use quill_posts::PostError;
use quill_types::Envelope;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// A repository error on its way out as an HTTP response.
///
/// Carries the status mapping in one place: invalid input is 400, a
/// missing post is 404, everything else is the store's fault and maps to
/// 500. The body is always a `success:false` envelope whose `error` text
/// is the [`PostError`] display string.
#[derive(Debug)]
pub struct ApiError(pub PostError);

impl From<PostError> for ApiError {
    fn from(err: PostError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            PostError::EmptyId | PostError::MissingFields => StatusCode::BAD_REQUEST,
            PostError::NotFound => StatusCode::NOT_FOUND,
            PostError::MalformedIndex | PostError::DeleteFailed | PostError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        (status, Json(Envelope::<()>::err(self.0.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: PostError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn client_faults_map_to_4xx() {
        assert_eq!(status_of(PostError::EmptyId), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(PostError::MissingFields), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(PostError::NotFound), StatusCode::NOT_FOUND);
    }

    #[test]
    fn system_faults_map_to_500() {
        assert_eq!(
            status_of(PostError::MalformedIndex),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(PostError::DeleteFailed),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            status_of(PostError::Internal("kv down".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
