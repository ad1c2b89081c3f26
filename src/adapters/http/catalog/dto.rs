//! HTTP DTOs for catalog endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::catalog::Question;

/// Request to author a new question.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateQuestionRequest {
    pub text: String,
    #[serde(default)]
    pub guideline: Option<String>,
}

/// One catalog question.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guideline: Option<String>,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            id: question.id().to_string(),
            text: question.text().to_string(),
            guideline: question.guideline().map(str::to_string),
        }
    }
}
