#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Json, Router};
use serde_json::Value;

use ops_gateway::app::{app, AppState};
use ops_gateway::client::{BackendClient, ExpiryHook};
use ops_gateway::config::AppConfig;
use ops_gateway::session::{Session, SessionStore, TokenBundle};

/// One request as the mock backend saw it.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
    pub body: Value,
}

/// In-process stand-in for the external backend: answers every route with
/// one canned status/body and records what it was asked.
#[derive(Clone)]
pub struct MockBackend {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockBackend {
    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn captured(&self) -> Vec<CapturedRequest> {
        self.requests.lock().expect("request log poisoned").clone()
    }
}

#[derive(Clone)]
struct BackendScript {
    hits: Arc<AtomicUsize>,
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    status: StatusCode,
    reply: Value,
}

async fn record(State(script): State<BackendScript>, req: Request) -> impl IntoResponse {
    script.hits.fetch_add(1, Ordering::SeqCst);

    let (parts, body) = req.into_parts();
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };

    script
        .requests
        .lock()
        .expect("request log poisoned")
        .push(CapturedRequest {
            method: parts.method.to_string(),
            path: parts.uri.path().to_string(),
            query: parts.uri.query().unwrap_or("").to_string(),
            authorization: parts
                .headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body,
        });

    (script.status, Json(script.reply.clone()))
}

pub async fn spawn_backend(status: StatusCode, reply: Value) -> Result<MockBackend> {
    let hits = Arc::new(AtomicUsize::new(0));
    let requests = Arc::new(Mutex::new(Vec::new()));

    let router = Router::new().fallback(record).with_state(BackendScript {
        hits: hits.clone(),
        requests: requests.clone(),
        status,
        reply,
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(MockBackend {
        base_url: format!("http://127.0.0.1:{}", port),
        hits,
        requests,
    })
}

/// Base URL nothing is listening on, for transport-failure scenarios.
pub fn unreachable_backend() -> String {
    let port = portpicker::pick_unused_port().expect("failed to pick free port");
    format!("http://127.0.0.1:{}", port)
}

pub fn test_config(backend_url: &str) -> AppConfig {
    AppConfig {
        backend_base_url: backend_url.trim_end_matches('/').to_string(),
        listen_port: 0,
        request_timeout_secs: 5,
    }
}

pub struct TestGateway {
    pub base_url: String,
    pub state: AppState,
}

pub async fn spawn_gateway(backend_url: &str) -> Result<TestGateway> {
    let state = AppState::new(&test_config(backend_url))?;
    spawn_gateway_with_state(state).await
}

pub async fn spawn_gateway_with_state(state: AppState) -> Result<TestGateway> {
    let router = app(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok(TestGateway {
        base_url: format!("http://127.0.0.1:{}", port),
        state,
    })
}

/// Gateway state with an injected expiry hook, for redirect-policy tests.
pub fn state_with_hook(backend_url: &str, hook: ExpiryHook) -> Result<AppState> {
    let config = test_config(backend_url);
    let sessions = SessionStore::new();
    let backend = BackendClient::with_expiry_hook(&config, sessions.clone(), hook)?;
    Ok(AppState {
        sessions,
        backend: Arc::new(backend),
    })
}

/// Install a fixed session, as if the operator had just signed in.
pub fn signed_in(state: &AppState) {
    state.sessions.install(Session::from_bundle(TokenBundle {
        token: "test-access-token".to_string(),
        refresh_token: "test-refresh-token".to_string(),
        expires_in: 3600,
        refresh_expires_in: 86400,
    }));
}
