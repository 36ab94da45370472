//! Fixed key shapes for the post keyspace.

/// Prefix for individual post record keys.
pub const POST_KEY_PREFIX: &str = "post_";

/// Key holding the listing index, a JSON array of post ids.
pub const INDEX_KEY: &str = "post_list";

/// Store key for the record of the post with the given id.
pub fn post_key(id: &str) -> String {
    format!("{POST_KEY_PREFIX}{id}")
}
