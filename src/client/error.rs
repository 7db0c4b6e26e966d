use serde_json::Value;
use thiserror::Error;

/// Errors produced by the outbound client and the feature proxies.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The backend rejected the session token (401/403). The interceptor
    /// has already expired the local session by the time this is returned.
    #[error("backend rejected authentication (HTTP {status})")]
    Auth { status: u16 },

    /// The backend answered with any other non-2xx status. Carries the
    /// response body so the relay can pass it through unchanged.
    #[error("backend returned HTTP {status}")]
    Backend { status: u16, body: Value },

    /// Transport-level failure: refused connection, timeout, DNS. Calls
    /// are single-attempt; nothing is retried.
    #[error("failed to reach backend: {0}")]
    Network(#[from] reqwest::Error),

    /// Request rejected before dispatch.
    #[error("invalid request: {0}")]
    Validation(String),
}

impl ClientError {
    /// HTTP status carried by the error, where one exists.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Auth { status } | ClientError::Backend { status, .. } => Some(*status),
            ClientError::Network(_) | ClientError::Validation(_) => None,
        }
    }
}
