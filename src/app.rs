use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::client::BackendClient;
use crate::config::AppConfig;
use crate::relay;
use crate::session::SessionStore;

/// Shared state for every relay route.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub backend: Arc<BackendClient>,
}

impl AppState {
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let sessions = SessionStore::new();
        let backend = BackendClient::new(config, sessions.clone())?;
        Ok(Self {
            sessions,
            backend: Arc::new(backend),
        })
    }
}

pub fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Session management and resource relays
        .merge(relay::routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Ops Console Gateway",
            "version": version,
            "description": "Session-holding relay between the admin console and the ops backend",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "auth": "/api/auth/login, /api/auth/session",
                "users": "/api/users[/create|/edit|/delete]",
                "departments": "/api/department[/create|/edit|/delete]",
                "systems": "/api/systems[/create|/edit|/delete]",
                "severities": "/api/severity-config[/create|/edit|/delete]",
                "incidents": "/api/incident[/create|/edit|/delete]",
                "config": "/api/config[/create|/edit|/delete]",
                "change_requests": "/api/system-cr-log[/create|/edit|/delete]",
                "log_search": "/api/log/filter",
            }
        }
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": chrono::Utc::now(),
        }
    }))
}
