//! Error types for the resource client.

use enroll_model::Resource;
use thiserror::Error;

/// Errors returned by any resource operation.
///
/// The client performs no recovery: every variant reaches the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The configured base URL cannot address the API.
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// URL as configured.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The client could not be built from its settings (bad user agent,
    /// TLS backend failure).
    #[error("invalid client settings: {0}")]
    InvalidConfig(String),

    /// Transport failure (connection refused, DNS, reset, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("{resource} request failed with status {status}: {body}")]
    Status {
        /// Collection the request targeted.
        resource: Resource,
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response body did not match the expected entity shape.
    #[error("JSON parse error: {0}")]
    JsonParse(String),
}

impl ClientError {
    /// Returns a short message suitable for showing to the operator.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::InvalidBaseUrl { .. } => "The API address is not a valid http(s) URL.",
            Self::InvalidConfig(_) => "The API client settings are invalid.",
            Self::Network(_) => "Could not reach the API server. Is it running?",
            Self::Status { status, .. } if *status == 404 => "The record no longer exists.",
            Self::Status { status, .. } if *status >= 500 => "The API server reported an error.",
            Self::Status { .. } => "The API server rejected the request.",
            Self::JsonParse(_) => "The API server sent an unexpected response.",
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::JsonParse(err.to_string())
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = ClientError::Network("connection refused".to_string());
        assert!(err.user_message().contains("API server"));

        let err = ClientError::Status {
            resource: Resource::Courses,
            status: 404,
            body: String::new(),
        };
        assert!(err.user_message().contains("no longer exists"));

        let err = ClientError::Status {
            resource: Resource::Courses,
            status: 400,
            body: "{\"teacher\":[\"Invalid pk\"]}".to_string(),
        };
        assert!(err.user_message().contains("rejected"));
        assert!(err.to_string().contains("courses request failed with status 400"));

        let err = ClientError::InvalidConfig("invalid user agent".to_string());
        assert!(err.user_message().contains("settings"));
    }

    #[test]
    fn test_decode_failures_are_json_errors() {
        let err = ClientError::JsonParse("expected value at line 1 column 1".to_string());
        assert_eq!(err.user_message(), "The API server sent an unexpected response.");
        assert!(err.to_string().starts_with("JSON parse error"));
    }
}
