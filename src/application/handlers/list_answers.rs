//! ListAnswersHandler - recorded answers for one session, in order.

use std::sync::Arc;

use crate::domain::foundation::{QuestionId, SurveyToken};
use crate::domain::survey::SurveyError;
use crate::ports::SessionStore;

/// Read model for one recorded answer, joined with its question text.
#[derive(Debug, Clone)]
pub struct AnswerView {
    pub question_id: QuestionId,
    pub question: String,
    pub answer: String,
}

/// Handler for reading back a session's answers (admin review).
pub struct ListAnswersHandler {
    store: Arc<dyn SessionStore>,
}

impl ListAnswersHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// # Errors
    ///
    /// - `InvalidToken` if the token is unknown
    pub async fn handle(&self, token: SurveyToken) -> Result<Vec<AnswerView>, SurveyError> {
        let session = self
            .store
            .find(&token)
            .await?
            .ok_or_else(|| SurveyError::invalid_token(token.clone()))?;

        session
            .answers()
            .iter()
            .map(|answer| {
                let question = session
                    .questions()
                    .iter()
                    .find(|q| q.id() == &answer.question_id)
                    .ok_or_else(|| {
                        SurveyError::integrity("recorded answer references no snapshot question")
                    })?;
                Ok(AnswerView {
                    question_id: answer.question_id,
                    question: question.text().to_string(),
                    answer: answer.text.clone(),
                })
            })
            .collect()
    }
}
