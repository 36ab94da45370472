//! Key-value storage for Quill.
//!
//! This crate defines the narrow store contract the post repository is
//! written against: string keys, string values, three operations. The
//! repository layers record and index semantics on top; the store itself
//! never interprets what it holds.
//!
//! # Keyspace
//!
//! Two key shapes exist, both defined in [`keys`]:
//!
//! - `post_<id>` -- a single post record, JSON object
//! - `post_list` -- the listing index, JSON array of post ids
//!
//! # Storage Backends
//!
//! All backends implement the [`KvStore`] trait:
//!
//! - [`InMemoryKvStore`] -- `HashMap`-based store for tests and embedding
//!
//! # Design Rules
//!
//! 1. `get` distinguishes "absent" (`Ok(None)`) from failure (`Err`).
//! 2. `put` is an unconditional upsert; there is no compare-and-swap.
//! 3. `delete` reports whether the key existed, and callers decide what a
//!    miss means.
//! 4. The store never interprets values -- it is a pure key-value store.
//! 5. All backend errors are propagated, never silently ignored.

pub mod error;
pub mod keys;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use keys::{post_key, INDEX_KEY, POST_KEY_PREFIX};
pub use memory::InMemoryKvStore;
pub use traits::KvStore;
