//! Server-side login sessions.

use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Opaque session identifier handed to the browser in a cookie.
pub type SessionId = Uuid;

/// A thread-safe map of live admin sessions.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<DashMap<SessionId, Instant>>,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(DashMap::new()),
            ttl,
        }
    }

    /// Start a new session, dropping any that have expired.
    pub fn create(&self) -> SessionId {
        self.inner.retain(|_, created| created.elapsed() < self.ttl);
        let id = Uuid::new_v4();
        self.inner.insert(id, Instant::now());
        id
    }

    /// Whether `id` names a live session. Expired sessions are dropped.
    pub fn is_valid(&self, id: &SessionId) -> bool {
        let expired = match self.inner.get(id) {
            Some(created) => created.elapsed() >= self.ttl,
            None => return false,
        };
        if expired {
            self.inner.remove(id);
        }
        !expired
    }

    /// End a session. Unknown ids are ignored.
    pub fn revoke(&self, id: &SessionId) {
        self.inner.remove(id);
    }

    /// Number of tracked sessions, expired ones included until next lookup.
    pub fn count(&self) -> usize {
        self.inner.len()
    }
}
