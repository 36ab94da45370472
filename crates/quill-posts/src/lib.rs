//! Post repository for Quill.
//!
//! Implements the CRUD surface over a [`quill_store::KvStore`] together
//! with the listing-index protocol: every post record lives under its own
//! `post_<id>` key, and a single `post_list` key holds the ordered array
//! of known ids so that "list all posts" never scans the store.
//!
//! # Key Types
//!
//! - [`PostRepository`] -- the four operations: list, get, save, delete
//! - [`PostIndex`] -- decoded `post_list` value with its comparison rules
//! - [`PostError`] -- repository failures, one variant per caller-visible kind
//!
//! # Consistency Model
//!
//! The record write and the index write are two separate store operations
//! with no transaction or compare-and-swap between them. The repository is
//! read-modify-write under a single-writer assumption:
//!
//! - Two concurrent saves of the same new id can both observe the id as
//!   absent and both write the index; last writer wins, so the index may
//!   briefly hold a duplicate or miss an id whose record write succeeded.
//! - A save that writes its record and then fails the index write leaves a
//!   record the listing cannot see until a later save of the same id.
//! - A delete that removes the record and then fails the index write
//!   leaves a dangling index entry.
//!
//! The listing tolerates all three: ids that resolve to no record are
//! dropped silently, so drift degrades the listing rather than breaking
//! it. Callers that need stronger guarantees must serialize writes
//! themselves.

pub mod error;
pub mod index;
pub mod repository;

pub use error::{PostError, PostResult};
pub use index::PostIndex;
pub use repository::PostRepository;
