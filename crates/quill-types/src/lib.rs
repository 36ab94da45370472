//! Foundation types for Quill, a blog content service over key-value
//! storage.
//!
//! Every other Quill crate depends on `quill-types`. This crate defines the
//! record and projection shapes, the permissive draft shape with its
//! field-alias normalization, the response envelope, the endpoint paths
//! shared by server and client, and the timestamp format.
//!
//! # Key Types
//!
//! - [`Post`] — complete, normalized blog post record
//! - [`PostSummary`] — listing projection of a record (no content)
//! - [`PostDraft`] — all-optional input/stored shape; [`PostDraft::normalize`]
//!   is the single defaulting point for the whole system
//! - [`Envelope`] — the `{success, data?, error?}` wrapper every API
//!   response uses
//! - [`HealthResponse`] — liveness payload
//! - [`paths`] — endpoint path constants

pub mod endpoints;
pub mod envelope;
pub mod post;
pub mod time;

pub use endpoints::{paths, HealthResponse};
pub use envelope::Envelope;
pub use post::{
    summary_of, Post, PostDraft, PostSummary, DEFAULT_AUTHOR, DEFAULT_CATEGORY, DEFAULT_COVER,
    DEFAULT_TITLE, SUMMARY_CHARS,
};
pub use time::iso_now;
