use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use quill_posts::PostRepository;
use quill_store::{InMemoryKvStore, KvStore};

use crate::handler;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<PostRepository>,
}

impl AppState {
    /// State over the given store.
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            repository: Arc::new(PostRepository::new(store)),
        }
    }

    /// State over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryKvStore::new()))
    }
}

/// Build the axum router with all API endpoints.
///
/// Every method router carries the not-found fallback so that a known
/// path with the wrong method answers 404 like an unknown path, instead
/// of axum's default 405. The CORS layer wraps the whole router and
/// answers preflight requests before any routing happens.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/posts",
            get(handler::list_posts).fallback(handler::unknown_endpoint),
        )
        .route(
            "/api/post",
            post(handler::save_post).fallback(handler::unknown_endpoint),
        )
        .route(
            "/api/post/",
            get(handler::empty_post_id)
                .delete(handler::empty_post_id)
                .fallback(handler::unknown_endpoint),
        )
        .route(
            "/api/post/:id",
            get(handler::get_post)
                .delete(handler::delete_post)
                .fallback(handler::unknown_endpoint),
        )
        .route(
            "/api/health",
            get(handler::health).fallback(handler::unknown_endpoint),
        )
        .fallback(handler::unknown_endpoint)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer()),
        )
        .with_state(state)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(86_400))
}
