use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::app::AppState;
use crate::error::ApiError;
use crate::proxy::auth::AuthProxy;
use crate::session::{Credentials, Session, TokenBundle};

use super::parse_body;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/session", get(session_status).delete(sign_out))
}

/// POST /api/auth/login - exchange console credentials for a backend token
/// bundle and install it as the gateway session. The tokens themselves stay
/// server-side; the browser only learns the expiry horizon.
async fn login(
    State(app): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let credentials: Credentials = parse_body(payload)?;
    let body = AuthProxy::new(app.backend.as_ref())
        .login(&credentials)
        .await?;
    let bundle: TokenBundle = serde_json::from_value(body).map_err(|e| {
        tracing::error!("unexpected login response from backend: {}", e);
        ApiError::internal_server_error("unexpected login response from backend")
    })?;

    let session = Session::from_bundle(bundle);
    let expires_at = session.expires_at;
    let refresh_expires_at = session.refresh_expires_at;
    app.sessions.install(session);
    tracing::info!(%expires_at, "operator signed in");

    Ok(Json(json!({
        "success": true,
        "data": {
            "expires_at": expires_at,
            "refresh_expires_at": refresh_expires_at,
        }
    })))
}

/// GET /api/auth/session - whether a session is installed, and until when.
/// The sign-in screen polls this to decide where to send the operator.
async fn session_status(State(app): State<AppState>) -> Json<Value> {
    match app.sessions.current() {
        Some(session) => Json(json!({
            "success": true,
            "data": {
                "authenticated": true,
                "expires_at": session.expires_at,
                "refresh_expires_at": session.refresh_expires_at,
            }
        })),
        None => Json(json!({
            "success": true,
            "data": { "authenticated": false }
        })),
    }
}

/// DELETE /api/auth/session - sign out. Safe to call repeatedly.
async fn sign_out(State(app): State<AppState>) -> Json<Value> {
    app.sessions.invalidate();
    tracing::info!("operator signed out");
    Json(json!({ "success": true }))
}
