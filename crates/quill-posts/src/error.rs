use quill_store::StoreError;

/// Errors from post repository operations.
///
/// Each variant's message is the exact string surfaced to API callers;
/// there is no structured error code on the wire, so the messages are
/// part of the contract and must stay stable.
#[derive(Debug, thiserror::Error)]
pub enum PostError {
    /// A lookup or delete was attempted with an empty id.
    #[error("post id must not be empty")]
    EmptyId,

    /// A save arrived without id, title, or content.
    #[error("post id, title and content must not be empty")]
    MissingFields,

    /// No record exists for the requested id.
    #[error("post not found")]
    NotFound,

    /// The index key holds valid JSON that is not an array.
    #[error("post_list is malformed, expected an array")]
    MalformedIndex,

    /// The store reported that the record delete did not happen.
    #[error("post deletion failed")]
    DeleteFailed,

    /// Store failure, unparseable stored value, or any other fault.
    #[error("operation failed: {0}")]
    Internal(String),
}

impl PostError {
    /// Whether the fault lies with the request rather than the system.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            PostError::EmptyId | PostError::MissingFields | PostError::NotFound
        )
    }
}

impl From<StoreError> for PostError {
    fn from(err: StoreError) -> Self {
        PostError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for PostError {
    fn from(err: serde_json::Error) -> Self {
        PostError::Internal(err.to_string())
    }
}

/// Result alias for repository operations.
pub type PostResult<T> = Result<T, PostError>;
