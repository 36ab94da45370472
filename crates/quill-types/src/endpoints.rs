/// HTTP endpoint paths served by the API.
pub mod paths {
    /// Listing endpoint.
    pub const POSTS: &str = "/api/posts";
    /// Single-post endpoint: save on POST, read and delete as
    /// `/api/post/<id>`.
    pub const POST: &str = "/api/post";
    pub const HEALTH: &str = "/api/health";
}

/// Health check response.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: "ok".into(),
            version: env!("CARGO_PKG_VERSION").into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_response_defaults() {
        let h = HealthResponse::default();
        assert_eq!(h.status, "ok");
        assert!(!h.version.is_empty());
    }

    #[test]
    fn endpoint_paths() {
        assert_eq!(paths::POSTS, "/api/posts");
        assert_eq!(paths::POST, "/api/post");
        assert_eq!(paths::HEALTH, "/api/health");
    }
}
