//! Shared-secret admin gate.
//!
//! This is a static key plus an in-memory session flag, nothing more: no
//! rotation, no rate limiting.

use subtle::ConstantTimeEq;

use crate::admin::session::{SessionId, SessionStore};
use crate::error::{Result, RsvpError};

/// Credentials a single request carries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestAuth {
    /// Session id from the login cookie, if any.
    pub session: Option<SessionId>,
    /// Admin key from the query string or a header, if any.
    pub key: Option<String>,
}

impl RequestAuth {
    pub fn with_key(key: impl Into<String>) -> Self {
        Self {
            session: None,
            key: Some(key.into()),
        }
    }

    pub fn with_session(session: SessionId) -> Self {
        Self {
            session: Some(session),
            key: None,
        }
    }
}

/// Proof that the gate admitted a request. Only the gate constructs it.
#[derive(Debug, Clone, Copy)]
pub struct AdminGrant {
    _private: (),
}

pub struct AdminGate {
    key: String,
    sessions: SessionStore,
}

impl AdminGate {
    pub fn new(key: impl Into<String>, sessions: SessionStore) -> Self {
        Self {
            key: key.into(),
            sessions,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    fn key_matches(&self, presented: &str) -> bool {
        bool::from(presented.as_bytes().ct_eq(self.key.as_bytes()))
    }

    /// Admit the request if its session is live or its key matches.
    pub fn authorize(&self, auth: &RequestAuth) -> Result<AdminGrant> {
        let session_ok = auth
            .session
            .as_ref()
            .is_some_and(|id| self.sessions.is_valid(id));
        let key_ok = auth.key.as_deref().is_some_and(|k| self.key_matches(k));

        if session_ok || key_ok {
            Ok(AdminGrant { _private: () })
        } else {
            Err(RsvpError::Forbidden)
        }
    }

    /// Start a session when `key` matches.
    pub fn login(&self, key: &str) -> Result<SessionId> {
        if !self.key_matches(key) {
            tracing::warn!("Admin login rejected");
            return Err(RsvpError::Forbidden);
        }
        let id = self.sessions.create();
        tracing::info!("Admin session started");
        Ok(id)
    }

    /// End the session, if any. Always succeeds.
    pub fn logout(&self, session: Option<&SessionId>) {
        if let Some(id) = session {
            self.sessions.revoke(id);
            tracing::info!("Admin session ended");
        }
    }
}
