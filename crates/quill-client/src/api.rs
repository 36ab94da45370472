use serde::de::DeserializeOwned;

use quill_types::{paths, Envelope, HealthResponse, Post, PostDraft, PostSummary};

use crate::error::{ClientError, ClientResult};

/// Typed HTTP client for the Quill API.
///
/// Stateless; every call is one request, no retries. Failure envelopes
/// come back as [`ClientError::Api`] with the server's message, anything
/// below that as [`ClientError::Network`].
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Client against `base_url`, e.g. `http://127.0.0.1:8787`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ---- Post operations ----

    pub async fn list_posts(&self) -> ClientResult<Vec<PostSummary>> {
        let response = self.http.get(self.url(paths::POSTS)).send().await?;
        unwrap_envelope(response).await
    }

    pub async fn get_post(&self, id: &str) -> ClientResult<Post> {
        let url = format!("{}/{id}", self.url(paths::POST));
        let response = self.http.get(url).send().await?;
        unwrap_envelope(response).await
    }

    /// Save a post and return the server's confirmation string.
    pub async fn save_post(&self, draft: &PostDraft) -> ClientResult<String> {
        let response = self
            .http
            .post(self.url(paths::POST))
            .json(draft)
            .send()
            .await?;
        unwrap_envelope(response).await
    }

    /// Delete a post and return the server's confirmation string.
    pub async fn delete_post(&self, id: &str) -> ClientResult<String> {
        let url = format!("{}/{id}", self.url(paths::POST));
        let response = self.http.delete(url).send().await?;
        unwrap_envelope(response).await
    }

    // ---- Service operations ----

    /// The health endpoint; unlike the post endpoints it has no envelope.
    pub async fn health(&self) -> ClientResult<HealthResponse> {
        let response = self.http.get(self.url(paths::HEALTH)).send().await?;
        Ok(response.error_for_status()?.json().await?)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Pull the payload out of a response envelope.
///
/// Status codes are deliberately not inspected on their own: a failure
/// envelope on any status and a success envelope without data are both
/// API failures, and the status only feeds the fallback message when the
/// envelope carries no error text.
async fn unwrap_envelope<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    let envelope: Envelope<T> = response.json().await?;
    match envelope {
        Envelope {
            success: true,
            data: Some(data),
            ..
        } => Ok(data),
        Envelope { error, .. } => Err(ClientError::Api(
            error.unwrap_or_else(|| format!("request failed with status {status}")),
        )),
    }
}
