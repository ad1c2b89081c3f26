//! SubmitMessageHandler - records one answer turn and emits the next prompt.

use std::sync::Arc;

use crate::domain::foundation::{SurveyState, SurveyToken, Timestamp};
use crate::domain::survey::{SurveyError, COMPLETION_MESSAGE};
use crate::ports::{ResponseComposer, SessionStore};

/// Command carrying one free-text answer.
#[derive(Debug, Clone)]
pub struct SubmitMessageCommand {
    pub token: SurveyToken,
    pub text: String,
}

/// Handler for the message operation.
///
/// A turn is atomic: the answer is recorded, the cursor advanced, and the
/// next prompt composed against a working copy, then the whole result is
/// committed with a compare-and-update keyed on the state and index the
/// turn observed. A composer failure or a lost race commits nothing, so
/// an answer is never recorded without its prompt having been produced.
pub struct SubmitMessageHandler {
    store: Arc<dyn SessionStore>,
    composer: Arc<dyn ResponseComposer>,
    session_ttl_secs: Option<u64>,
}

impl SubmitMessageHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        composer: Arc<dyn ResponseComposer>,
        session_ttl_secs: Option<u64>,
    ) -> Self {
        Self {
            store,
            composer,
            session_ttl_secs,
        }
    }

    /// Record `text` as the answer to the current question and return the
    /// next prompt, or the completion message after the last question.
    ///
    /// # Errors
    ///
    /// - `InvalidToken` if the token is unknown or expired
    /// - `InvalidState` if the session is `Pending` or `Completed`, if an
    ///   answer already exists for the current slot, or if a concurrent
    ///   turn committed first
    /// - `EmptyAnswer` if `text` is empty or whitespace-only
    /// - `Composer` if the next prompt could not be produced
    pub async fn handle(&self, cmd: SubmitMessageCommand) -> Result<String, SurveyError> {
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

        let mut next = session;
        next.record_answer(cmd.text.clone())?;

        let reply = if next.state() == SurveyState::Completed {
            COMPLETION_MESSAGE.to_string()
        } else {
            let question = next.current_question().ok_or_else(|| {
                SurveyError::integrity("active session has no current question")
            })?;
            self.composer
                .compose(question, Some(&cmd.text))
                .await
                .map_err(|e| SurveyError::composer(e.to_string()))?
        };

        let committed = self
            .store
            .compare_and_update(&next, expected_state, expected_index)
            .await?;
        if !committed {
            return Err(SurveyError::invalid_state(
                "A concurrent turn already advanced this survey",
            ));
        }

        tracing::debug!(
            token = %cmd.token,
            index = next.current_index(),
            state = %next.state(),
            "answer turn committed"
        );
        Ok(reply)
    }
}
