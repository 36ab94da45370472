//! The post repository: four operations over a key-value store.
//!
//! All record and index semantics live here. The store below is a dumb
//! string map; the HTTP layer above only translates errors to statuses.

use std::sync::Arc;

use serde_json::Value;

use quill_store::{post_key, KvStore, INDEX_KEY};
use quill_types::{iso_now, Post, PostDraft, PostSummary};

use crate::error::{PostError, PostResult};
use crate::index::{is_falsy, PostIndex};

/// CRUD over posts plus listing-index maintenance.
///
/// Stateless apart from the injected store handle; every operation is a
/// fresh read-modify-write against the store with no caching in between.
pub struct PostRepository {
    store: Arc<dyn KvStore>,
}

impl std::fmt::Debug for PostRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostRepository").finish_non_exhaustive()
    }
}

impl PostRepository {
    /// Create a repository backed by the given store.
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    /// List all posts the index knows about, in index order.
    ///
    /// Falsy index entries and ids whose record is missing or empty are
    /// dropped silently; the listing tolerates index drift instead of
    /// failing on it. Returns card projections, not full records.
    pub async fn list(&self) -> PostResult<Vec<PostSummary>> {
        let raw = self.store.get(INDEX_KEY).await?;
        let index = PostIndex::decode(raw.as_deref())?;

        let mut posts = Vec::with_capacity(index.len());
        for id in index.listing_ids() {
            let Some(record) = self.store.get(&post_key(&id)).await? else {
                tracing::debug!(%id, "index entry has no record, skipping");
                continue;
            };
            let Some(draft) = decode_record(&record)? else {
                tracing::debug!(%id, "index entry has an empty record, skipping");
                continue;
            };
            posts.push(draft.normalize(&id).to_summary());
        }
        Ok(posts)
    }

    /// Fetch a single post by id, with field defaults applied.
    ///
    /// A record that decodes as empty counts as missing.
    pub async fn get(&self, id: &str) -> PostResult<Post> {
        if id.is_empty() {
            return Err(PostError::EmptyId);
        }
        let record = self
            .store
            .get(&post_key(id))
            .await?
            .ok_or(PostError::NotFound)?;
        let draft = decode_record(&record)?.ok_or(PostError::NotFound)?;
        Ok(draft.normalize(id))
    }

    /// Create or overwrite a post.
    ///
    /// Validates before any write: id, title, and content must all be
    /// present and non-empty. `updateTime` is stamped unconditionally;
    /// `createTime` is kept only if the caller round-trips it, otherwise
    /// it is stamped too. The record write happens first, then the index
    /// is read and the id appended only if no exact string entry exists.
    /// A save of an already-indexed id never writes the index at all.
    pub async fn save(&self, draft: PostDraft) -> PostResult<Post> {
        if !(has_text(&draft.id) && has_text(&draft.title) && has_text(&draft.content)) {
            return Err(PostError::MissingFields);
        }

        let now = iso_now();
        let mut draft = draft;
        if !has_text(&draft.create_time) {
            draft.create_time = Some(now.clone());
        }
        draft.update_time = Some(now);

        let id = draft.id.clone().unwrap_or_default();
        let post = draft.normalize(&id);

        let record = serde_json::to_string(&post)?;
        self.store.put(&post_key(&post.id), &record).await?;

        let raw = self.store.get(INDEX_KEY).await?;
        let mut index = PostIndex::decode(raw.as_deref())?;
        if !index.contains(&post.id) {
            index.push(&post.id);
            self.store.put(INDEX_KEY, &index.encode()?).await?;
        }

        tracing::debug!(id = %post.id, "post saved");
        Ok(post)
    }

    /// Delete a post and scrub its id from the index.
    ///
    /// The record delete happens first; a store-reported miss is
    /// [`PostError::DeleteFailed`] and leaves the index untouched. When
    /// the delete lands, the index is rewritten unconditionally with
    /// every coerced match removed, which also repairs numeric twins
    /// left by older writers.
    pub async fn delete(&self, id: &str) -> PostResult<()> {
        if id.is_empty() {
            return Err(PostError::EmptyId);
        }
        if !self.store.delete(&post_key(id)).await? {
            return Err(PostError::DeleteFailed);
        }

        let raw = self.store.get(INDEX_KEY).await?;
        let mut index = PostIndex::decode(raw.as_deref())?;
        index.remove(id);
        self.store.put(INDEX_KEY, &index.encode()?).await?;

        tracing::debug!(%id, "post deleted");
        Ok(())
    }
}

fn has_text(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

/// Decode a stored record value.
///
/// A record that parses to a falsy scalar (`null`, `false`, `0`, `""`)
/// counts as absent, the same rule the index applies to its entries.
/// Anything else that is not an object fails as corrupt.
fn decode_record(raw: &str) -> PostResult<Option<PostDraft>> {
    let value: Value = serde_json::from_str(raw)?;
    if is_falsy(&value) {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(value)?))
}
