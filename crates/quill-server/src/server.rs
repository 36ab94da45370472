use std::sync::Arc;

use tokio::net::TcpListener;

use quill_store::KvStore;

use crate::config::ServerConfig;
use crate::error::ServerResult;
use crate::router::{build_router, AppState};

/// Quill API server.
pub struct QuillServer {
    config: ServerConfig,
    state: AppState,
}

impl QuillServer {
    /// Server over the given store.
    pub fn new(config: ServerConfig, store: Arc<dyn KvStore>) -> Self {
        Self {
            config,
            state: AppState::new(store),
        }
    }

    /// Server over a fresh in-memory store. Contents vanish on shutdown.
    pub fn in_memory(config: ServerConfig) -> Self {
        Self {
            config,
            state: AppState::in_memory(),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router (useful for testing).
    pub fn router(&self) -> axum::Router {
        build_router(self.state.clone())
    }

    /// Start serving requests.
    pub async fn serve(self) -> ServerResult<()> {
        let app = self.router();
        let listener = TcpListener::bind(&self.config.bind_addr).await?;
        tracing::info!("quill server listening on {}", self.config.bind_addr);
        axum::serve(listener, app)
            .await
            .map_err(|e| crate::error::ServerError::Internal(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_construction() {
        let server = QuillServer::in_memory(ServerConfig::default());
        assert_eq!(server.config().bind_addr, "127.0.0.1:8787".parse().unwrap());
    }

    #[test]
    fn router_builds() {
        let server = QuillServer::in_memory(ServerConfig::default());
        let _router = server.router();
    }
}
