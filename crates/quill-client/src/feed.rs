use tokio::sync::watch;

use quill_types::{Post, PostDraft, PostSummary};

use crate::api::ApiClient;
use crate::error::{ClientError, ClientResult};

/// Snapshot of the feed's reactive state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedState {
    /// The cached listing, replaced wholesale on every refresh.
    pub posts: Vec<PostSummary>,
    /// True while any call is in flight.
    pub loading: bool,
    /// Message of the last failed call, cleared when a new call starts.
    pub error: Option<String>,
}

/// Reactive posts state over an [`ApiClient`].
///
/// The shape a UI binding layer expects: every method updates `loading`
/// and `error` as a side effect and also returns its own result. Saves
/// and deletes refresh the whole cached listing on success instead of
/// patching it; failed calls leave the previous `posts` untouched.
/// Subscribers get a [`watch`] receiver and observe every state change.
pub struct PostsFeed {
    client: ApiClient,
    state: watch::Sender<FeedState>,
}

impl std::fmt::Debug for PostsFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostsFeed").finish_non_exhaustive()
    }
}

impl PostsFeed {
    pub fn new(client: ApiClient) -> Self {
        let (state, _) = watch::channel(FeedState::default());
        Self { client, state }
    }

    /// Current state snapshot.
    pub fn state(&self) -> FeedState {
        self.state.borrow().clone()
    }

    /// Watch for state changes.
    pub fn subscribe(&self) -> watch::Receiver<FeedState> {
        self.state.subscribe()
    }

    /// Refresh the cached listing.
    pub async fn fetch_posts(&self) -> ClientResult<Vec<PostSummary>> {
        self.begin();
        match self.client.list_posts().await {
            Ok(posts) => {
                self.state.send_modify(|s| {
                    s.posts = posts.clone();
                    s.loading = false;
                });
                Ok(posts)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Fetch a single post. Does not touch the cached listing.
    pub async fn fetch_post_by_id(&self, id: &str) -> ClientResult<Post> {
        self.begin();
        match self.client.get_post(id).await {
            Ok(post) => {
                self.finish();
                Ok(post)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Save a post, then refresh the listing.
    ///
    /// A refresh failure does not turn the save into a failure: the
    /// confirmation is still returned and the refresh error lands in
    /// `error` for the UI to show.
    pub async fn save_post(&self, draft: &PostDraft) -> ClientResult<String> {
        self.begin();
        match self.client.save_post(draft).await {
            Ok(confirmation) => {
                let _ = self.fetch_posts().await;
                Ok(confirmation)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Delete a post, then refresh the listing.
    pub async fn delete_post(&self, id: &str) -> ClientResult<String> {
        self.begin();
        match self.client.delete_post(id).await {
            Ok(confirmation) => {
                let _ = self.fetch_posts().await;
                Ok(confirmation)
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    fn begin(&self) {
        self.state.send_modify(|s| {
            s.loading = true;
            s.error = None;
        });
    }

    fn finish(&self) {
        self.state.send_modify(|s| s.loading = false);
    }

    fn fail(&self, err: ClientError) -> ClientError {
        tracing::debug!(error = %err, "feed call failed");
        self.state.send_modify(|s| {
            s.loading = false;
            s.error = Some(err.to_string());
        });
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Port 9 is the discard service; nothing listens there in test
    // environments, so calls fail fast with a connection error.
    fn dead_feed() -> PostsFeed {
        PostsFeed::new(ApiClient::new("http://127.0.0.1:9"))
    }

    #[test]
    fn default_state_is_idle() {
        let state = FeedState::default();
        assert!(state.posts.is_empty());
        assert!(!state.loading);
        assert_eq!(state.error, None);
    }

    #[tokio::test]
    async fn failed_fetch_sets_error_and_keeps_posts() {
        let feed = dead_feed();
        let err = feed.fetch_posts().await.unwrap_err();
        assert!(matches!(err, ClientError::Network(_)));

        let state = feed.state();
        assert!(!state.loading);
        assert!(state
            .error
            .as_deref()
            .is_some_and(|e| e.starts_with("network exception")));
        assert!(state.posts.is_empty());
    }

    #[tokio::test]
    async fn subscribers_observe_changes() {
        let feed = dead_feed();
        let mut rx = feed.subscribe();
        let _ = feed.fetch_posts().await;

        rx.changed().await.unwrap();
        assert!(rx.borrow().error.is_some());
    }
}
