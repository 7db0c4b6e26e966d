// HTTP error surface for the relay routes
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::{json, Value};

use crate::client::ClientError;

/// Relay-boundary error with appropriate status codes and client-friendly
/// messages. Backend failures are relayed with their original status and
/// body rather than translated into a generic error.
#[derive(Debug)]
pub enum ApiError {
    // 400 Bad Request
    BadRequest(String),

    // 401 Unauthorized
    Unauthorized(String),

    // Backend non-2xx, passed through verbatim
    Upstream { status: u16, body: Value },

    // 502 Bad Gateway (backend unreachable)
    BadGateway(String),

    // 500 Internal Server Error
    InternalServerError(String),
}

impl ApiError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::BadRequest(_) => 400,
            ApiError::Unauthorized(_) => 401,
            ApiError::Upstream { status, .. } => *status,
            ApiError::BadGateway(_) => 502,
            ApiError::InternalServerError(_) => 500,
        }
    }

    /// Get client-safe error message
    pub fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg) => msg,
            ApiError::Unauthorized(msg) => msg,
            ApiError::Upstream { .. } => "backend error",
            ApiError::BadGateway(msg) => msg,
            ApiError::InternalServerError(msg) => msg,
        }
    }

    /// Get error code for client handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "BAD_REQUEST",
            ApiError::Unauthorized(_) => "UNAUTHORIZED",
            ApiError::Upstream { .. } => "UPSTREAM_ERROR",
            ApiError::BadGateway(_) => "BAD_GATEWAY",
            ApiError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    /// Convert to JSON response body. Upstream errors keep the backend's
    /// body untouched.
    pub fn to_json(&self) -> Value {
        match self {
            ApiError::Upstream { body, .. } => body.clone(),
            _ => {
                json!({
                    "error": true,
                    "message": self.message(),
                    "code": self.error_code()
                })
            }
        }
    }
}

// Static constructor methods
impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        ApiError::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::Unauthorized(message.into())
    }

    pub fn bad_gateway(message: impl Into<String>) -> Self {
        ApiError::BadGateway(message.into())
    }

    pub fn internal_server_error(message: impl Into<String>) -> Self {
        ApiError::InternalServerError(message.into())
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Auth { .. } => {
                ApiError::unauthorized("session is no longer valid, sign in again")
            }
            ClientError::Backend { status, body } => ApiError::Upstream { status, body },
            ClientError::Network(err) => {
                // Log the transport detail but keep the client message generic
                tracing::error!("backend unreachable: {}", err);
                ApiError::bad_gateway("backend unreachable")
            }
            ClientError::Validation(msg) => ApiError::bad_request(msg),
        }
    }
}

// Standard error trait implementations
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}

// Automatic HTTP response conversion for Axum
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self.to_json())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upstream_errors_keep_status_and_body() {
        let err = ApiError::from(ClientError::Backend {
            status: 404,
            body: json!({ "error": true, "message": "no such incident" }),
        });

        assert_eq!(err.status_code(), 404);
        assert_eq!(err.to_json()["message"], json!("no such incident"));
    }

    #[test]
    fn auth_failures_surface_as_401() {
        let err = ApiError::from(ClientError::Auth { status: 403 });
        assert_eq!(err.status_code(), 401);
        assert_eq!(err.error_code(), "UNAUTHORIZED");
    }

    #[test]
    fn validation_failures_surface_as_400() {
        let err = ApiError::from(ClientError::Validation("at least one id is required".into()));
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.to_json()["code"], json!("BAD_REQUEST"));
    }
}
