//! In-memory session store.
//!
//! Sessions live in a `HashMap` behind an async `RwLock`; expiry is
//! checked by callers on read and enforced in bulk by the periodic
//! cleanup task in `main`.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use glasspane_session::{SessionId, SessionTokens, UserProfile};
use tokio::sync::RwLock;

/// Everything the server keeps for one session.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    tokens: SessionTokens,
    profile: UserProfile,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Creates a record valid for `duration` from now.
    pub fn new(tokens: SessionTokens, profile: UserProfile, duration: Duration) -> Self {
        let created_at = Utc::now();
        Self {
            tokens,
            profile,
            created_at,
            expires_at: created_at + duration,
        }
    }

    /// The token pair handed to the UI.
    pub fn tokens(&self) -> &SessionTokens {
        &self.tokens
    }

    /// The user profile document.
    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// When the session was established.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Whether the session has passed its expiry.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Shared in-memory store of active sessions.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<SessionId, SessionRecord>>,
}

impl SessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a session record under the given ID.
    pub async fn create(&self, id: SessionId, record: SessionRecord) {
        self.sessions.write().await.insert(id, record);
    }

    /// Looks up a session by ID.
    ///
    /// Expired records are still returned; validity is the caller's
    /// check, so expiry can be reported distinctly from absence.
    pub async fn find(&self, id: &SessionId) -> Option<SessionRecord> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Deletes a session. Returns true if a record was removed.
    pub async fn delete(&self, id: &SessionId) -> bool {
        self.sessions.write().await.remove(id).is_some()
    }

    /// Removes all expired sessions, returning how many were removed.
    pub async fn delete_expired(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, record| !record.is_expired());
        before - sessions.len()
    }
}

/// Generates a new unique session ID.
pub fn generate_session_id() -> SessionId {
    SessionId::new(ulid::Ulid::new().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glasspane_session::{AccessToken, IdentityToken};

    fn sample_record(duration: Duration) -> SessionRecord {
        let tokens = SessionTokens::new(
            AccessToken::new("access-token".to_string()),
            IdentityToken::from_raw("not-a-jwt".to_string()),
        );
        SessionRecord::new(tokens, UserProfile::default(), duration)
    }

    #[tokio::test]
    async fn create_then_find_returns_record() {
        let store = SessionStore::new();
        let id = generate_session_id();
        store.create(id.clone(), sample_record(Duration::minutes(5))).await;

        let record = store.find(&id).await.expect("record should exist");
        assert_eq!(record.tokens().access_token().as_str(), "access-token");
        assert!(record.created_at() <= Utc::now());
        assert!(!record.is_expired());
    }

    #[tokio::test]
    async fn find_unknown_id_returns_none() {
        let store = SessionStore::new();
        assert!(store.find(&SessionId::from("missing")).await.is_none());
    }

    #[tokio::test]
    async fn expired_record_reports_expired() {
        let store = SessionStore::new();
        let id = generate_session_id();
        store.create(id.clone(), sample_record(Duration::minutes(-1))).await;

        let record = store.find(&id).await.expect("record should exist");
        assert!(record.is_expired());
    }

    #[tokio::test]
    async fn delete_removes_record_once() {
        let store = SessionStore::new();
        let id = generate_session_id();
        store.create(id.clone(), sample_record(Duration::minutes(5))).await;

        assert!(store.delete(&id).await);
        assert!(!store.delete(&id).await);
        assert!(store.find(&id).await.is_none());
    }

    #[tokio::test]
    async fn delete_expired_keeps_live_sessions() {
        let store = SessionStore::new();
        let live = generate_session_id();
        let expired = generate_session_id();
        store.create(live.clone(), sample_record(Duration::minutes(5))).await;
        store.create(expired.clone(), sample_record(Duration::minutes(-1))).await;

        assert_eq!(store.delete_expired().await, 1);
        assert!(store.find(&live).await.is_some());
        assert!(store.find(&expired).await.is_none());
    }

    #[test]
    fn generated_session_ids_are_unique() {
        let a = generate_session_id();
        let b = generate_session_id();
        assert_ne!(a, b);
    }
}
