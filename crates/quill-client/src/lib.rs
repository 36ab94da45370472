//! Client for the Quill API.
//!
//! Two layers: [`ApiClient`] makes typed HTTP calls and unwraps the
//! response envelope, and [`PostsFeed`] keeps the reactive state a UI
//! layer binds to (current posts, loading flag, last error).

pub mod api;
pub mod error;
pub mod feed;

pub use api::ApiClient;
pub use error::{ClientError, ClientResult};
pub use feed::{FeedState, PostsFeed};

// Re-export key types
pub use quill_types::{HealthResponse, Post, PostDraft, PostSummary};

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use quill_server::{build_router, AppState};
    use quill_store::InMemoryKvStore;

    use super::*;

    async fn spawn_server() -> (Arc<InMemoryKvStore>, ApiClient) {
        let store = Arc::new(InMemoryKvStore::new());
        let app = build_router(AppState::new(store.clone()));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (store, ApiClient::new(format!("http://{addr}")))
    }

    fn draft(id: &str, title: &str, content: &str) -> PostDraft {
        PostDraft {
            id: Some(id.into()),
            title: Some(title.into()),
            content: Some(content.into()),
            ..PostDraft::default()
        }
    }

    // -----------------------------------------------------------------------
    // ApiClient against a live server
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn client_round_trip() {
        let (_, client) = spawn_server().await;

        let confirmation = client
            .save_post(&draft("1", "A", "hello world"))
            .await
            .unwrap();
        assert_eq!(confirmation, "post saved");

        let post = client.get_post("1").await.unwrap();
        assert_eq!(post.id, "1");
        assert_eq!(post.title, "A");
        assert_eq!(post.summary, "hello world");

        let posts = client.list_posts().await.unwrap();
        assert_eq!(posts.len(), 1);

        assert_eq!(client.delete_post("1").await.unwrap(), "post deleted");
        assert!(client.list_posts().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn api_failures_surface_the_server_message() {
        let (_, client) = spawn_server().await;

        let err = client.get_post("missing").await.unwrap_err();
        assert!(matches!(&err, ClientError::Api(m) if m == "post not found"));

        let err = client.delete_post("missing").await.unwrap_err();
        assert!(matches!(&err, ClientError::Api(m) if m == "post deletion failed"));

        let err = client.save_post(&PostDraft::default()).await.unwrap_err();
        assert!(
            matches!(&err, ClientError::Api(m) if m == "post id, title and content must not be empty")
        );
    }

    #[tokio::test]
    async fn health_round_trip() {
        let (_, client) = spawn_server().await;
        let health = client.health().await.unwrap();
        assert_eq!(health.status, "ok");
    }

    // -----------------------------------------------------------------------
    // PostsFeed against a live server
    // -----------------------------------------------------------------------

    #[tokio::test]
    async fn feed_tracks_the_listing() {
        let (_, client) = spawn_server().await;
        let feed = PostsFeed::new(client);

        feed.fetch_posts().await.unwrap();
        assert!(feed.state().posts.is_empty());

        feed.save_post(&draft("1", "A", "hello")).await.unwrap();
        let state = feed.state();
        assert_eq!(state.posts.len(), 1);
        assert_eq!(state.posts[0].id, "1");
        assert!(!state.loading);
        assert_eq!(state.error, None);

        feed.delete_post("1").await.unwrap();
        assert!(feed.state().posts.is_empty());
    }

    #[tokio::test]
    async fn feed_failure_keeps_previous_posts() {
        let (_, client) = spawn_server().await;
        let feed = PostsFeed::new(client);
        feed.save_post(&draft("1", "A", "hello")).await.unwrap();

        let err = feed.delete_post("ghost").await.unwrap_err();
        assert!(matches!(err, ClientError::Api(_)));

        let state = feed.state();
        assert_eq!(state.posts.len(), 1);
        assert_eq!(state.error.as_deref(), Some("post deletion failed"));
        assert!(!state.loading);
    }

    #[tokio::test]
    async fn feed_fetches_single_posts_without_touching_the_listing() {
        let (_, client) = spawn_server().await;
        let feed = PostsFeed::new(client);
        feed.save_post(&draft("1", "A", "hello")).await.unwrap();
        feed.save_post(&draft("2", "B", "world")).await.unwrap();

        let post = feed.fetch_post_by_id("1").await.unwrap();
        assert_eq!(post.title, "A");
        assert_eq!(feed.state().posts.len(), 2);
    }
}
