//! Survey session aggregate.
//!
//! One session per issued link. The session owns the catalog snapshot taken
//! at start time, the cursor into it, and the answers recorded so far. All
//! mutation goes through [`SurveySession::begin`] and
//! [`SurveySession::record_answer`], which enforce the state machine.
//!
//! # Invariants
//!
//! - `current_index` never decreases and never exceeds `questions.len()`
//! - at most one answer per question id, only for indices `< current_index`
//! - state is `Completed` iff `current_index == questions.len()` after start

use crate::domain::catalog::Question;
use crate::domain::foundation::{QuestionId, SurveyState, SurveyToken, Timestamp};
use crate::domain::survey::SurveyError;
use serde::{Deserialize, Serialize};

/// An answer recorded for one question of the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedAnswer {
    pub question_id: QuestionId,
    pub text: String,
}

/// Survey session aggregate - one respondent's attempt at the survey.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveySession {
    /// Sole credential for this session.
    token: SurveyToken,

    /// Lifecycle state (Pending, Active, Completed).
    state: SurveyState,

    /// Cursor into the question snapshot. Monotonically non-decreasing.
    current_index: usize,

    /// Catalog snapshot bound at start time. Empty while Pending; immune
    /// to later catalog edits once bound.
    questions: Vec<Question>,

    /// Answers in traversal order, one per answered question.
    answers: Vec<RecordedAnswer>,

    /// When the session was created.
    created_at: Timestamp,

    /// When the session was last updated.
    updated_at: Timestamp,
}

impl SurveySession {
    /// Create a new pending session for a freshly minted token.
    pub fn new(token: SurveyToken) -> Self {
        let now = Timestamp::now();
        Self {
            token,
            state: SurveyState::Pending,
            current_index: 0,
            questions: Vec::new(),
            answers: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Reconstitute a session from persistence (no validation).
    pub fn reconstitute(
        token: SurveyToken,
        state: SurveyState,
        current_index: usize,
        questions: Vec<Question>,
        answers: Vec<RecordedAnswer>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            token,
            state,
            current_index,
            questions,
            answers,
            created_at,
            updated_at,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the session token.
    pub fn token(&self) -> &SurveyToken {
        &self.token
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> SurveyState {
        self.state
    }

    /// Returns the cursor into the question snapshot.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the catalog snapshot bound to this session.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the answers recorded so far, in traversal order.
    pub fn answers(&self) -> &[RecordedAnswer] {
        &self.answers
    }

    /// Returns the question at the given snapshot index.
    ///
    /// `None` for an index at or past the snapshot length. Callers that
    /// reach `None` for an index below the snapshot length have hit an
    /// integrity fault, since indices are only produced by this aggregate.
    pub fn question_at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Returns the question the cursor points at, if the survey is not done.
    pub fn current_question(&self) -> Option<&Question> {
        self.question_at(self.current_index)
    }

    /// Returns when the session was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    /// Returns when the session was last updated.
    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Checks whether the session has outlived the given TTL.
    pub fn is_expired(&self, ttl_secs: u64, now: &Timestamp) -> bool {
        self.created_at.plus_secs(ttl_secs).is_before(now)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // State machine
    // ─────────────────────────────────────────────────────────────────────────

    /// Bind the catalog snapshot and activate the session.
    ///
    /// Valid only from `Pending`. An empty snapshot completes the session
    /// immediately; otherwise the session becomes `Active` with the cursor
    /// at the first question.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the session is not `Pending`
    pub fn begin(&mut self, snapshot: Vec<Question>) -> Result<(), SurveyError> {
        match self.state {
            SurveyState::Pending => {}
            SurveyState::Active => {
                return Err(SurveyError::invalid_state("Survey has already been started"))
            }
            SurveyState::Completed => {
                return Err(SurveyError::invalid_state("Survey is already completed"))
            }
        }

        self.questions = snapshot;
        self.state = if self.questions.is_empty() {
            SurveyState::Completed
        } else {
            SurveyState::Active
        };
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Record an answer for the current question and advance the cursor.
    ///
    /// Valid only from `Active`. Completes the session when the last
    /// question is answered.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the session is `Pending` or `Completed`, or if
    ///   an answer already exists for the current slot (replay)
    /// - `EmptyAnswer` if the text is empty or whitespace-only
    /// - `Integrity` if the cursor points past the snapshot while `Active`
    pub fn record_answer(&mut self, text: String) -> Result<(), SurveyError> {
        match self.state {
            SurveyState::Active => {}
            SurveyState::Pending => {
                return Err(SurveyError::invalid_state("Survey has not been started"))
            }
            SurveyState::Completed => {
                return Err(SurveyError::invalid_state("Survey is already completed"))
            }
        }

        if text.trim().is_empty() {
            return Err(SurveyError::empty_answer());
        }

        let question_id = *self
            .current_question()
            .ok_or_else(|| {
                SurveyError::integrity(format!(
                    "active session cursor {} points past snapshot of {}",
                    self.current_index,
                    self.questions.len()
                ))
            })?
            .id();

        // The invariant keeps one answer per slot; a hit here is a replay.
        if self.answers.iter().any(|a| a.question_id == question_id) {
            return Err(SurveyError::invalid_state(
                "An answer is already recorded for the current question",
            ));
        }

        self.answers.push(RecordedAnswer { question_id, text });
        self.current_index += 1;

        if self.current_index == self.questions.len() {
            self.state = SurveyState::Completed;
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn question(text: &str) -> Question {
        Question::new(text.to_string(), None).unwrap()
    }

    fn two_question_snapshot() -> Vec<Question> {
        vec![question("Name?"), question("Age?")]
    }

    fn active_session() -> SurveySession {
        let mut session = SurveySession::new(SurveyToken::mint());
        session.begin(two_question_snapshot()).unwrap();
        session
    }

    // Construction tests

    #[test]
    fn new_session_is_pending_at_index_zero() {
        let session = SurveySession::new(SurveyToken::mint());
        assert_eq!(session.state(), SurveyState::Pending);
        assert_eq!(session.current_index(), 0);
        assert!(session.answers().is_empty());
        assert!(session.questions().is_empty());
    }

    // Begin tests

    #[test]
    fn begin_activates_session_with_cursor_at_first_question() {
        let session = active_session();
        assert_eq!(session.state(), SurveyState::Active);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.current_question().unwrap().text(), "Name?");
    }

    #[test]
    fn begin_with_empty_snapshot_completes_immediately() {
        let mut session = SurveySession::new(SurveyToken::mint());
        session.begin(Vec::new()).unwrap();
        assert_eq!(session.state(), SurveyState::Completed);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn begin_twice_fails_and_leaves_state_unchanged() {
        let mut session = active_session();
        let result = session.begin(two_question_snapshot());
        assert!(matches!(result, Err(SurveyError::InvalidState(_))));
        assert_eq!(session.state(), SurveyState::Active);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn begin_on_completed_session_fails() {
        let mut session = SurveySession::new(SurveyToken::mint());
        session.begin(Vec::new()).unwrap();
        let result = session.begin(two_question_snapshot());
        assert!(matches!(result, Err(SurveyError::InvalidState(_))));
    }

    // Record answer tests

    #[test]
    fn record_answer_before_begin_fails() {
        let mut session = SurveySession::new(SurveyToken::mint());
        let result = session.record_answer("Alice".to_string());
        assert!(matches!(result, Err(SurveyError::InvalidState(_))));
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn record_answer_advances_cursor_and_stores_text() {
        let mut session = active_session();
        let first_id = *session.current_question().unwrap().id();

        session.record_answer("Alice".to_string()).unwrap();

        assert_eq!(session.current_index(), 1);
        assert_eq!(session.answers().len(), 1);
        assert_eq!(session.answers()[0].question_id, first_id);
        assert_eq!(session.answers()[0].text, "Alice");
        assert_eq!(session.current_question().unwrap().text(), "Age?");
    }

    #[test]
    fn record_answer_rejects_empty_text_without_mutation() {
        let mut session = active_session();
        let result = session.record_answer("".to_string());
        assert!(matches!(result, Err(SurveyError::EmptyAnswer)));
        assert_eq!(session.current_index(), 0);
        assert!(session.answers().is_empty());
    }

    #[test]
    fn record_answer_rejects_whitespace_text() {
        let mut session = active_session();
        let result = session.record_answer("   \t".to_string());
        assert!(matches!(result, Err(SurveyError::EmptyAnswer)));
    }

    #[test]
    fn last_answer_completes_the_session() {
        let mut session = active_session();
        session.record_answer("Alice".to_string()).unwrap();
        session.record_answer("30".to_string()).unwrap();

        assert_eq!(session.state(), SurveyState::Completed);
        assert_eq!(session.current_index(), 2);
        assert!(session.current_question().is_none());
    }

    #[test]
    fn record_answer_after_completion_fails() {
        let mut session = active_session();
        session.record_answer("Alice".to_string()).unwrap();
        session.record_answer("30".to_string()).unwrap();

        let result = session.record_answer("anything".to_string());
        assert!(matches!(result, Err(SurveyError::InvalidState(_))));
        assert_eq!(session.answers().len(), 2);
    }

    #[test]
    fn answers_exist_only_below_the_cursor() {
        let mut session = active_session();
        session.record_answer("Alice".to_string()).unwrap();

        for answer in session.answers() {
            let slot = session
                .questions()
                .iter()
                .position(|q| q.id() == &answer.question_id)
                .unwrap();
            assert!(slot < session.current_index());
        }
    }

    // Expiry tests

    #[test]
    fn fresh_session_is_not_expired() {
        let session = SurveySession::new(SurveyToken::mint());
        assert!(!session.is_expired(3600, &Timestamp::now()));
    }

    #[test]
    fn session_expires_after_ttl() {
        let session = SurveySession::new(SurveyToken::mint());
        let later = Timestamp::now().plus_secs(7200);
        assert!(session.is_expired(3600, &later));
    }

    // Invariant property: the cursor never decreases and never exceeds the
    // snapshot length, for any interleaving of valid and invalid answers.

    proptest! {
        #[test]
        fn cursor_is_monotonic_and_bounded(answers in proptest::collection::vec("[ a-zA-Z0-9]{0,12}", 0..12)) {
            let snapshot = vec![question("Q1?"), question("Q2?"), question("Q3?")];
            let len = snapshot.len();

            let mut session = SurveySession::new(SurveyToken::mint());
            session.begin(snapshot).unwrap();

            let mut previous = session.current_index();
            for text in answers {
                let _ = session.record_answer(text);
                let index = session.current_index();
                prop_assert!(index >= previous);
                prop_assert!(index <= len);
                previous = index;
            }

            prop_assert_eq!(
                session.state() == SurveyState::Completed,
                session.current_index() == len
            );
        }
    }
}
