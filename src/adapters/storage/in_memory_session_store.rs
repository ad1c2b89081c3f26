//! In-memory session store adapter.
//!
//! Keeps every session behind one `tokio::sync::RwLock`. The write lock
//! makes `compare_and_update` atomic, which is what serializes concurrent
//! turns on the same token.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{SurveyState, SurveyToken, Timestamp};
use crate::domain::survey::{SurveyError, SurveySession};
use crate::ports::SessionStore;

/// In-memory token -> session mapping.
#[derive(Debug, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SurveyToken, SurveySession>>>,
}

impl InMemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Get the number of stored sessions.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: &SurveySession) -> Result<(), SurveyError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(session.token()) {
            return Err(SurveyError::storage("token already mapped to a session"));
        }
        sessions.insert(session.token().clone(), session.clone());
        Ok(())
    }

    async fn find(&self, token: &SurveyToken) -> Result<Option<SurveySession>, SurveyError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(token).cloned())
    }

    async fn compare_and_update(
        &self,
        updated: &SurveySession,
        expected_state: SurveyState,
        expected_index: usize,
    ) -> Result<bool, SurveyError> {
        let mut sessions = self.sessions.write().await;
        let current = sessions
            .get_mut(updated.token())
            .ok_or_else(|| SurveyError::storage("session vanished during update"))?;

        if current.state() != expected_state || current.current_index() != expected_index {
            return Ok(false);
        }

        *current = updated.clone();
        Ok(true)
    }

    async fn purge_expired(&self, ttl_secs: u64) -> Result<usize, SurveyError> {
        let now = Timestamp::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(ttl_secs, &now));
        Ok(before - sessions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Question;

    fn pending_session() -> SurveySession {
        SurveySession::new(SurveyToken::mint())
    }

    #[tokio::test]
    async fn insert_and_find_round_trips() {
        let store = InMemorySessionStore::new();
        let session = pending_session();

        store.insert(&session).await.unwrap();
        let found = store.find(session.token()).await.unwrap().unwrap();
        assert_eq!(found, session);
    }

    #[tokio::test]
    async fn find_unknown_token_returns_none() {
        let store = InMemorySessionStore::new();
        let found = store.find(&SurveyToken::from_string("nope")).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_token() {
        let store = InMemorySessionStore::new();
        let session = pending_session();

        store.insert(&session).await.unwrap();
        let result = store.insert(&session).await;
        assert!(matches!(result, Err(SurveyError::Storage(_))));
    }

    #[tokio::test]
    async fn compare_and_update_commits_when_guard_matches() {
        let store = InMemorySessionStore::new();
        let session = pending_session();
        store.insert(&session).await.unwrap();

        let mut updated = session.clone();
        updated
            .begin(vec![Question::new("Name?".to_string(), None).unwrap()])
            .unwrap();

        let committed = store
            .compare_and_update(&updated, SurveyState::Pending, 0)
            .await
            .unwrap();
        assert!(committed);

        let stored = store.find(session.token()).await.unwrap().unwrap();
        assert_eq!(stored.state(), SurveyState::Active);
    }

    #[tokio::test]
    async fn compare_and_update_refuses_stale_guard() {
        let store = InMemorySessionStore::new();
        let session = pending_session();
        store.insert(&session).await.unwrap();

        let mut updated = session.clone();
        updated
            .begin(vec![Question::new("Name?".to_string(), None).unwrap()])
            .unwrap();

        // First commit wins.
        assert!(store
            .compare_and_update(&updated, SurveyState::Pending, 0)
            .await
            .unwrap());

        // Replay against the stale guard must not land.
        let committed = store
            .compare_and_update(&updated, SurveyState::Pending, 0)
            .await
            .unwrap();
        assert!(!committed);
    }

    #[tokio::test]
    async fn compare_and_update_on_unknown_token_is_a_storage_error() {
        let store = InMemorySessionStore::new();
        let session = pending_session();
        let result = store
            .compare_and_update(&session, SurveyState::Pending, 0)
            .await;
        assert!(matches!(result, Err(SurveyError::Storage(_))));
    }

    #[tokio::test]
    async fn purge_expired_removes_only_old_sessions() {
        let store = InMemorySessionStore::new();
        store.insert(&pending_session()).await.unwrap();
        store.insert(&pending_session()).await.unwrap();

        // Nothing is older than an hour.
        assert_eq!(store.purge_expired(3600).await.unwrap(), 0);
        assert_eq!(store.session_count().await, 2);

        // Everything is older than zero seconds.
        assert_eq!(store.purge_expired(0).await.unwrap(), 2);
        assert_eq!(store.session_count().await, 0);
    }
}
