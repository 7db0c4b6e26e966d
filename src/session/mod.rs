use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

/// Token bundle returned by the backend's credential exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenBundle {
    pub token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
    pub expires_in: i64,
    pub refresh_expires_in: i64,
}

/// Live authentication bundle for the signed-in operator.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
    pub refresh_expires_at: DateTime<Utc>,
}

impl Session {
    pub fn from_bundle(bundle: TokenBundle) -> Self {
        let now = Utc::now();
        Self {
            access_token: bundle.token,
            refresh_token: bundle.refresh_token,
            expires_at: now + Duration::seconds(bundle.expires_in),
            refresh_expires_at: now + Duration::seconds(bundle.refresh_expires_in),
        }
    }
}

/// Sign-in form input. Lives only for the duration of the credential
/// exchange; never persisted.
#[derive(Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Shared store of the current session. Cheap to clone; every clone
/// observes the same session. Readers see either the old or the new
/// `Arc<Session>`, never a torn value.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Option<Arc<Session>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current session, if the operator is signed in.
    pub fn current(&self) -> Option<Arc<Session>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the session after a successful credential exchange.
    pub fn install(&self, session: Session) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::new(session));
    }

    /// Drop the session. Calling with no session installed is a no-op.
    pub fn invalidate(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Drop the session and report whether this call removed a live one.
    /// Of any number of concurrent callers, at most one sees `true`.
    pub fn expire(&self) -> bool {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some()
    }
}
