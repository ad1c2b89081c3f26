//! StartSessionHandler - activates a pending session and emits the first prompt.

use std::sync::Arc;

use crate::domain::foundation::{SurveyToken, Timestamp};
use crate::domain::survey::{SurveyError, COMPLETION_MESSAGE};
use crate::ports::{QuestionCatalog, ResponseComposer, SessionStore};

/// Command to start a survey session.
#[derive(Debug, Clone)]
pub struct StartSessionCommand {
    pub token: SurveyToken,
}

/// Handler for the start operation.
///
/// Snapshots the catalog into the session so later catalog edits never
/// re-index a running survey. The whole turn commits with a
/// compare-and-update; a composer failure leaves the session `Pending`.
pub struct StartSessionHandler {
    store: Arc<dyn SessionStore>,
    catalog: Arc<dyn QuestionCatalog>,
    composer: Arc<dyn ResponseComposer>,
    session_ttl_secs: Option<u64>,
}

impl StartSessionHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        catalog: Arc<dyn QuestionCatalog>,
        composer: Arc<dyn ResponseComposer>,
        session_ttl_secs: Option<u64>,
    ) -> Self {
        Self {
            store,
            catalog,
            composer,
            session_ttl_secs,
        }
    }

    /// Start the session behind `token` and return the first prompt, or
    /// the completion message when the catalog is empty.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` if the token is unknown or expired
    /// - `InvalidState` if the session is not `Pending`, or a concurrent
    ///   start committed first
    /// - `Composer` if the first prompt could not be produced
    pub async fn handle(&self, cmd: StartSessionCommand) -> Result<String, SurveyError> {
        let session = self
            .store
            .find(&cmd.token)
            .await?
            .ok_or_else(|| SurveyError::invalid_token(cmd.token.clone()))?;

        if let Some(ttl) = self.session_ttl_secs {
            if session.is_expired(ttl, &Timestamp::now()) {
                return Err(SurveyError::invalid_token(cmd.token.clone()));
            }
        }

        let expected_state = session.state();
        let expected_index = session.current_index();

        // Mutate a working copy; nothing is visible until the commit below.
        let mut next = session;
        let snapshot = self.catalog.list().await?;
        next.begin(snapshot)?;

        let reply = match next.current_question() {
            None => COMPLETION_MESSAGE.to_string(),
            Some(question) => self
                .composer
                .compose(question, None)
                .await
                .map_err(|e| SurveyError::composer(e.to_string()))?,
        };

        let committed = self
            .store
            .compare_and_update(&next, expected_state, expected_index)
            .await?;
        if !committed {
            return Err(SurveyError::invalid_state(
                "Survey was started by a concurrent request",
            ));
        }

        tracing::info!(
            token = %cmd.token,
            questions = next.questions().len(),
            "survey session started"
        );
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::composer::EchoComposer;
    use crate::adapters::storage::{InMemoryQuestionCatalog, InMemorySessionStore};
    use crate::domain::catalog::Question;
    use crate::domain::foundation::SurveyState;
    use crate::domain::survey::SurveySession;
    use crate::ports::ComposerError;
    use async_trait::async_trait;

    /// Composer that always fails, for rollback tests.
    struct FailingComposer;

    #[async_trait]
    impl ResponseComposer for FailingComposer {
        async fn compose(
            &self,
            _question: &Question,
            _prior_answer: Option<&str>,
        ) -> Result<String, ComposerError> {
            Err(ComposerError::Timeout { timeout_secs: 10 })
        }
    }

    async fn seeded_catalog() -> Arc<InMemoryQuestionCatalog> {
        let catalog = Arc::new(InMemoryQuestionCatalog::new());
        catalog
            .append(Question::new("Name?".to_string(), None).unwrap())
            .await
            .unwrap();
        catalog
            .append(Question::new("Age?".to_string(), None).unwrap())
            .await
            .unwrap();
        catalog
    }

    async fn pending_token(store: &Arc<InMemorySessionStore>) -> SurveyToken {
        let token = SurveyToken::mint();
        store
            .insert(&SurveySession::new(token.clone()))
            .await
            .unwrap();
        token
    }

    fn handler(
        store: Arc<InMemorySessionStore>,
        catalog: Arc<InMemoryQuestionCatalog>,
        composer: Arc<dyn ResponseComposer>,
    ) -> StartSessionHandler {
        StartSessionHandler::new(store, catalog, composer, None)
    }

    #[tokio::test]
    async fn start_returns_first_prompt_and_activates_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let catalog = seeded_catalog().await;
        let token = pending_token(&store).await;

        let handler = handler(store.clone(), catalog, Arc::new(EchoComposer::new()));
        let reply = handler
            .handle(StartSessionCommand {
                token: token.clone(),
            })
            .await
            .unwrap();

        assert!(reply.contains("Name?"));
        let session = store.find(&token).await.unwrap().unwrap();
        assert_eq!(session.state(), SurveyState::Active);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.questions().len(), 2);
    }

    #[tokio::test]
    async fn start_with_unknown_token_fails() {
        let store = Arc::new(InMemorySessionStore::new());
        let catalog = seeded_catalog().await;
        let handler = handler(store, catalog, Arc::new(EchoComposer::new()));

        let result = handler
            .handle(StartSessionCommand {
                token: SurveyToken::from_string("nope"),
            })
            .await;
        assert!(matches!(result, Err(SurveyError::InvalidToken(_))));
    }

    #[tokio::test]
    async fn start_twice_fails_and_leaves_session_unchanged() {
        let store = Arc::new(InMemorySessionStore::new());
        let catalog = seeded_catalog().await;
        let token = pending_token(&store).await;

        let handler = handler(store.clone(), catalog, Arc::new(EchoComposer::new()));
        handler
            .handle(StartSessionCommand {
                token: token.clone(),
            })
            .await
            .unwrap();

        let result = handler
            .handle(StartSessionCommand {
                token: token.clone(),
            })
            .await;
        assert!(matches!(result, Err(SurveyError::InvalidState(_))));

        let session = store.find(&token).await.unwrap().unwrap();
        assert_eq!(session.state(), SurveyState::Active);
        assert_eq!(session.current_index(), 0);
    }

    #[tokio::test]
    async fn start_with_empty_catalog_completes_immediately() {
        let store = Arc::new(InMemorySessionStore::new());
        let catalog = Arc::new(InMemoryQuestionCatalog::new());
        let token = pending_token(&store).await;

        let handler = handler(store.clone(), catalog, Arc::new(EchoComposer::new()));
        let reply = handler
            .handle(StartSessionCommand {
                token: token.clone(),
            })
            .await
            .unwrap();

        assert_eq!(reply, COMPLETION_MESSAGE);
        let session = store.find(&token).await.unwrap().unwrap();
        assert_eq!(session.state(), SurveyState::Completed);
    }

    #[tokio::test]
    async fn composer_failure_leaves_session_pending() {
        let store = Arc::new(InMemorySessionStore::new());
        let catalog = seeded_catalog().await;
        let token = pending_token(&store).await;

        let handler = handler(store.clone(), catalog, Arc::new(FailingComposer));
        let result = handler
            .handle(StartSessionCommand {
                token: token.clone(),
            })
            .await;
        assert!(matches!(result, Err(SurveyError::Composer(_))));

        let session = store.find(&token).await.unwrap().unwrap();
        assert_eq!(session.state(), SurveyState::Pending);
        assert!(session.questions().is_empty());
    }

    #[tokio::test]
    async fn expired_token_is_rejected_as_invalid() {
        let store = Arc::new(InMemorySessionStore::new());
        let catalog = seeded_catalog().await;
        let token = pending_token(&store).await;

        // Zero TTL: every session is already expired.
        let handler =
            StartSessionHandler::new(store, catalog, Arc::new(EchoComposer::new()), Some(0));
        let result = handler.handle(StartSessionCommand { token }).await;
        assert!(matches!(result, Err(SurveyError::InvalidToken(_))));
    }

    #[tokio::test]
    async fn catalog_edits_after_start_do_not_reach_the_session() {
        let store = Arc::new(InMemorySessionStore::new());
        let catalog = seeded_catalog().await;
        let token = pending_token(&store).await;

        let handler = handler(store.clone(), catalog.clone(), Arc::new(EchoComposer::new()));
        handler
            .handle(StartSessionCommand {
                token: token.clone(),
            })
            .await
            .unwrap();

        catalog
            .append(Question::new("City?".to_string(), None).unwrap())
            .await
            .unwrap();

        let session = store.find(&token).await.unwrap().unwrap();
        assert_eq!(session.questions().len(), 2);
    }
}
