use async_trait::async_trait;

use crate::error::StoreResult;

/// String-keyed, string-valued store.
///
/// All implementations must satisfy these invariants:
/// - `get` returns `Ok(None)` for an absent key and reserves `Err` for
///   backend failure, so callers can tell "missing" from "broken".
/// - `put` is an unconditional upsert. There is no compare-and-swap; the
///   repository built on top is explicitly last-writer-wins.
/// - `delete` returns whether the key existed. Callers own the decision of
///   whether a miss is an error.
/// - Values pass through untouched. The store never parses or validates
///   what it holds.
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    async fn put(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Remove `key`. Returns `true` if the key existed.
    async fn delete(&self, key: &str) -> StoreResult<bool>;
}
