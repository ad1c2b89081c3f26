//! CreateQuestionHandler - admin authoring of catalog questions.

use std::sync::Arc;

use crate::domain::catalog::Question;
use crate::domain::survey::SurveyError;
use crate::ports::QuestionCatalog;

/// Command to author a new question.
#[derive(Debug, Clone)]
pub struct CreateQuestionCommand {
    pub text: String,
    pub guideline: Option<String>,
}

/// Handler for appending questions to the catalog.
///
/// New questions only affect sessions started afterwards; running sessions
/// keep the snapshot they were bound to.
pub struct CreateQuestionHandler {
    catalog: Arc<dyn QuestionCatalog>,
}

impl CreateQuestionHandler {
    pub fn new(catalog: Arc<dyn QuestionCatalog>) -> Self {
        Self { catalog }
    }

    /// # Errors
    ///
    /// - `Validation` if the question text is empty or too long
    /// - `Storage` on persistence failure
    pub async fn handle(&self, cmd: CreateQuestionCommand) -> Result<Question, SurveyError> {
        let question = Question::new(cmd.text, cmd.guideline)?;
        self.catalog.append(question.clone()).await?;

        tracing::info!(question_id = %question.id(), "question created");
        Ok(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryQuestionCatalog;

    #[tokio::test]
    async fn creates_and_persists_a_question() {
        let catalog = Arc::new(InMemoryQuestionCatalog::new());
        let handler = CreateQuestionHandler::new(catalog.clone());

        let question = handler
            .handle(CreateQuestionCommand {
                text: "What is your city?".to_string(),
                guideline: Some("e.g. New York".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(question.text(), "What is your city?");
        let listed = catalog.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id(), question.id());
    }

    #[tokio::test]
    async fn rejects_empty_text() {
        let handler = CreateQuestionHandler::new(Arc::new(InMemoryQuestionCatalog::new()));
        let result = handler
            .handle(CreateQuestionCommand {
                text: "  ".to_string(),
                guideline: None,
            })
            .await;
        assert!(matches!(result, Err(SurveyError::ValidationFailed { .. })));
    }
}
