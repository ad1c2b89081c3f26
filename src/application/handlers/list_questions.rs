//! ListQuestionsHandler - read-only catalog listing for the admin UI.

use std::sync::Arc;

use crate::domain::catalog::Question;
use crate::domain::survey::SurveyError;
use crate::ports::QuestionCatalog;

/// Handler for listing catalog questions in insertion order.
pub struct ListQuestionsHandler {
    catalog: Arc<dyn QuestionCatalog>,
}

impl ListQuestionsHandler {
    pub fn new(catalog: Arc<dyn QuestionCatalog>) -> Self {
        Self { catalog }
    }

    pub async fn handle(&self) -> Result<Vec<Question>, SurveyError> {
        self.catalog.list().await
    }
}
