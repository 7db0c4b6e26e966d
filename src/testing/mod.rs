use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::client::{ClientError, Dispatch, RequestDescriptor};
use crate::session::{Session, TokenBundle};

/// Dispatcher that records every descriptor and answers with a canned body.
pub struct RecordingDispatcher {
    pub requests: Mutex<Vec<RequestDescriptor>>,
    pub reply: Value,
}

impl RecordingDispatcher {
    pub fn new(reply: Value) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            reply,
        }
    }

    /// Canned empty page, enough for calls that ignore the response.
    pub fn ok() -> Self {
        Self::new(json!({ "data": [], "total": 0 }))
    }

    pub fn take_requests(&self) -> Vec<RequestDescriptor> {
        self.requests
            .lock()
            .expect("request log poisoned")
            .drain(..)
            .collect()
    }
}

#[async_trait]
impl Dispatch for RecordingDispatcher {
    async fn dispatch(&self, request: RequestDescriptor) -> Result<Value, ClientError> {
        self.requests
            .lock()
            .expect("request log poisoned")
            .push(request);
        Ok(self.reply.clone())
    }
}

/// Session with fixed tokens for store and interceptor tests.
pub fn sample_session() -> Session {
    Session::from_bundle(TokenBundle {
        token: "access-token-1".to_string(),
        refresh_token: "refresh-token-1".to_string(),
        expires_in: 3600,
        refresh_expires_in: 86400,
    })
}
