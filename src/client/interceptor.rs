use std::sync::Arc;

use reqwest::StatusCode;

use crate::session::SessionStore;

/// Callback fired when the backend declares the session dead; wired to the
/// console's sign-in redirect.
pub type ExpiryHook = Arc<dyn Fn() + Send + Sync>;

/// Watches every backend response for authentication failure.
///
/// On 401/403 it expires the session store and fires the sign-in hook. The
/// store's atomic take guarantees the hook fires once per session no matter
/// how many in-flight calls fail together. Every other status, error
/// statuses included, passes through untouched.
pub struct AuthInterceptor {
    sessions: SessionStore,
    on_expired: ExpiryHook,
}

impl AuthInterceptor {
    pub fn new(sessions: SessionStore, on_expired: ExpiryHook) -> Self {
        Self {
            sessions,
            on_expired,
        }
    }

    pub fn inspect(&self, status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            if self.sessions.expire() {
                tracing::warn!(
                    status = status.as_u16(),
                    "backend rejected the session, signing operator out"
                );
                (self.on_expired)();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::testing::sample_session;

    fn counting_interceptor() -> (AuthInterceptor, SessionStore, Arc<AtomicUsize>) {
        let sessions = SessionStore::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = fired.clone();
        let interceptor = AuthInterceptor::new(
            sessions.clone(),
            Arc::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }),
        );
        (interceptor, sessions, fired)
    }

    #[test]
    fn unauthorized_signs_out_and_fires_hook_once() {
        let (interceptor, sessions, fired) = counting_interceptor();
        sessions.install(sample_session());

        interceptor.inspect(StatusCode::UNAUTHORIZED);
        interceptor.inspect(StatusCode::UNAUTHORIZED);

        assert!(sessions.current().is_none());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn forbidden_is_treated_like_unauthorized() {
        let (interceptor, sessions, fired) = counting_interceptor();
        sessions.install(sample_session());

        interceptor.inspect(StatusCode::FORBIDDEN);

        assert!(sessions.current().is_none());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn other_statuses_leave_the_session_alone() {
        let (interceptor, sessions, fired) = counting_interceptor();
        sessions.install(sample_session());

        interceptor.inspect(StatusCode::OK);
        interceptor.inspect(StatusCode::NOT_FOUND);
        interceptor.inspect(StatusCode::INTERNAL_SERVER_ERROR);

        assert!(sessions.current().is_some());
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn hook_rearms_after_a_fresh_sign_in() {
        let (interceptor, sessions, fired) = counting_interceptor();
        sessions.install(sample_session());

        interceptor.inspect(StatusCode::UNAUTHORIZED);
        sessions.install(sample_session());
        interceptor.inspect(StatusCode::FORBIDDEN);

        assert_eq!(fired.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn no_session_means_no_redirect() {
        let (interceptor, sessions, fired) = counting_interceptor();

        interceptor.inspect(StatusCode::UNAUTHORIZED);

        assert!(sessions.current().is_none());
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }
}
