//! Session store port.
//!
//! Defines the contract for persisting and retrieving survey sessions,
//! keyed by token.
//!
//! # Design
//!
//! - **Token-scoped**: the token is the only lookup key
//! - **Turn serialization**: `compare_and_update` is the single mutation
//!   primitive; it commits a whole turn only if the stored session still
//!   matches the state and index the caller observed, so two concurrent
//!   turns on one token cannot both land

use crate::domain::foundation::{SurveyState, SurveyToken};
use crate::domain::survey::{SurveyError, SurveySession};
use async_trait::async_trait;

/// Port for survey session persistence.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Persist a freshly issued session.
    ///
    /// # Errors
    ///
    /// - `Storage` on persistence failure or token collision
    async fn insert(&self, session: &SurveySession) -> Result<(), SurveyError>;

    /// Find a session by its token.
    ///
    /// Returns `None` if the token is unknown.
    async fn find(&self, token: &SurveyToken) -> Result<Option<SurveySession>, SurveyError>;

    /// Persist `updated` only if the stored session still carries
    /// `expected_state` and `expected_index`.
    ///
    /// Returns `Ok(false)` when the guard no longer matches (a concurrent
    /// turn committed first); the caller must not retry the turn.
    ///
    /// # Errors
    ///
    /// - `Storage` on persistence failure or unknown token
    async fn compare_and_update(
        &self,
        updated: &SurveySession,
        expected_state: SurveyState,
        expected_index: usize,
    ) -> Result<bool, SurveyError>;

    /// Remove sessions older than `ttl_secs`. Returns the purge count.
    async fn purge_expired(&self, ttl_secs: u64) -> Result<usize, SurveyError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_store_is_object_safe() {
        fn _accepts_dyn(_store: &dyn SessionStore) {}
    }
}
