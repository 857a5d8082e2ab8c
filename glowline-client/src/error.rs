//! Client error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Error type for client operations.
///
/// Provider-facing failures carry the HTTP status and response body so the
/// caller can diagnose them; nothing is retried internally.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The auth endpoint returned a non-success status.
    #[error("Authentication failed: HTTP {status}: {body}")]
    Authentication {
        /// HTTP status returned by the auth endpoint.
        status: StatusCode,
        /// Response body, for diagnosis.
        body: String,
    },

    /// A provider endpoint returned a non-success status. For a windowed
    /// readings fetch this aborts the remaining windows.
    #[error("Provider request failed: HTTP {status}: {body}")]
    Provider {
        /// HTTP status returned by the endpoint.
        status: StatusCode,
        /// Response body, for diagnosis.
        body: String,
    },

    /// HTTP transport failure, including request timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Core error.
    #[error("Core error: {0}")]
    Core(#[from] glowline_core::CoreError),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A header value that cannot go on the wire.
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_carries_status_and_body() {
        let err = ClientError::Provider {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "upstream exploded".to_string(),
        };

        let message = err.to_string();
        assert!(message.contains("500"));
        assert!(message.contains("upstream exploded"));
    }

    #[test]
    fn test_core_error_converts() {
        let err: ClientError = glowline_core::CoreError::EmptyResourceId.into();
        assert!(matches!(err, ClientError::Core(_)));
    }
}
