//! HTTP server for Quill.
//!
//! Serves the post API over axum: listing, single-post reads, saves, and
//! deletes, every response wrapped in the `{success, data?, error?}`
//! envelope with permissive CORS for browser clients.
//!
//! # Key Types
//!
//! - [`QuillServer`] -- config plus store, serves until shutdown
//! - [`AppState`] -- the repository handle shared across handlers
//! - [`ApiError`] -- repository error with its HTTP status mapping
//! - [`ServerConfig`] -- bind address, loadable from TOML

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use router::{build_router, AppState};
pub use server::QuillServer;
