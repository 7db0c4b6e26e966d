use serde::Serialize;
use serde_json::Value;

use crate::client::{ClientError, Dispatch, RequestDescriptor};
use crate::session::Credentials;

/// Wire shape of the backend credential exchange. The console signs in with
/// an email address; the backend knows it as the username.
#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

pub struct AuthProxy<'a, D: Dispatch + ?Sized> {
    client: &'a D,
}

impl<'a, D: Dispatch + ?Sized> AuthProxy<'a, D> {
    pub fn new(client: &'a D) -> Self {
        Self { client }
    }

    /// Exchange credentials for a token bundle. Invalid credentials come
    /// back as an authentication error from the backend.
    pub async fn login(&self, credentials: &Credentials) -> Result<Value, ClientError> {
        let request = RequestDescriptor::post("/api/auth/login").with_json(&LoginRequest {
            username: &credentials.email,
            password: &credentials.password,
        })?;
        self.client.dispatch(request).await
    }
}
