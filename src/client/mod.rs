mod descriptor;
mod error;
mod interceptor;

pub use descriptor::RequestDescriptor;
pub use error::ClientError;
pub use interceptor::{AuthInterceptor, ExpiryHook};

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::session::SessionStore;

/// Seam between the feature proxies and the HTTP client, so proxies can be
/// exercised against a recording dispatcher in tests.
#[async_trait]
pub trait Dispatch: Send + Sync {
    async fn dispatch(&self, request: RequestDescriptor) -> Result<Value, ClientError>;
}

/// Outbound client for the console backend.
///
/// Attaches the current session's bearer token when one exists, makes
/// exactly one attempt per call, and routes every response status through
/// the auth interceptor before the caller sees it.
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
    sessions: SessionStore,
    interceptor: AuthInterceptor,
}

impl BackendClient {
    pub fn new(config: &AppConfig, sessions: SessionStore) -> Result<Self, reqwest::Error> {
        let hook: ExpiryHook = Arc::new(|| {
            tracing::info!("directing operator to sign-in");
        });
        Self::with_expiry_hook(config, sessions, hook)
    }

    pub fn with_expiry_hook(
        config: &AppConfig,
        sessions: SessionStore,
        on_expired: ExpiryHook,
    ) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.backend_base_url.clone(),
            sessions: sessions.clone(),
            interceptor: AuthInterceptor::new(sessions, on_expired),
        })
    }
}

#[async_trait]
impl Dispatch for BackendClient {
    async fn dispatch(&self, request: RequestDescriptor) -> Result<Value, ClientError> {
        let request_id = Uuid::new_v4();
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .header("X-Request-Id", request_id.to_string());

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(session) = self.sessions.current() {
            builder = builder.bearer_auth(&session.access_token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        tracing::debug!(%request_id, method = %request.method, path = %request.path, "forwarding to backend");

        let response = builder.send().await.map_err(ClientError::Network)?;
        let status = response.status();
        tracing::debug!(%request_id, status = status.as_u16(), "backend responded");

        self.interceptor.inspect(status);
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(ClientError::Auth {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(ClientError::Network)?;

        if !status.is_success() {
            // Relay error bodies verbatim; some backend error pages are not
            // JSON, so fall back to the raw text.
            let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            });
            return Err(ClientError::Backend {
                status: status.as_u16(),
                body,
            });
        }

        if bytes.is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&bytes).map_err(|e| ClientError::Backend {
            status: status.as_u16(),
            body: Value::String(format!("backend returned invalid JSON: {e}")),
        })
    }
}
