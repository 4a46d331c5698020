//! Error taxonomy for client operations.

use std::time::Duration;

/// Errors from EchoOS client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    // Retryable errors
    /// Network-level failure (connect, send, or mid-stream read).
    #[error("network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// Request timed out.
    #[error("timeout after {0:?}")]
    Timeout(Duration),
    /// The backend answered with a non-success HTTP status.
    #[error("http {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// Response body text, possibly empty.
        body: String,
    },

    // Terminal errors
    /// A response body did not match the expected shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    /// Submission rejected before any request: the input was empty or
    /// whitespace-only.
    #[error("empty input")]
    EmptyInput,
    /// Submission rejected: a session is already streaming on this
    /// conversation.
    #[error("a session is already in flight")]
    Busy,
}

impl ClientError {
    /// Whether this error is likely transient and the request can be retried.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) | Self::Timeout(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::InvalidResponse(_) | Self::EmptyInput | Self::Busy => false,
        }
    }
}
