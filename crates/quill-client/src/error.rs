use thiserror::Error;

/// Errors from client calls.
///
/// The API has no structured error codes, so the split is coarse on
/// purpose: either the call never produced a usable envelope, or the
/// envelope said no.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request failed below the API: connection refused, timeout, or
    /// a response body that was not a valid envelope.
    #[error("network exception: {0}")]
    Network(String),

    /// The server answered with a failure envelope; the payload is its
    /// `error` text verbatim.
    #[error("{0}")]
    Api(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network(err.to_string())
    }
}

/// Result alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_errors_carry_the_prefix() {
        let err = ClientError::Network("connection refused".into());
        assert_eq!(err.to_string(), "network exception: connection refused");
    }

    #[test]
    fn api_errors_pass_the_message_through() {
        let err = ClientError::Api("post not found".into());
        assert_eq!(err.to_string(), "post not found");
    }
}
