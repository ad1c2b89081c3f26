//! HTTP DTOs for survey endpoints.
//!
//! These types decouple the HTTP API from domain types.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{AnswerView, LinkView};
use crate::domain::foundation::SurveyState;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One free-text chat turn from the respondent.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatMessageRequest {
    pub text: String,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response carrying a freshly issued token.
#[derive(Debug, Clone, Serialize)]
pub struct IssueLinkResponse {
    pub token: String,
}

/// Response carrying the next bot message.
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Link details for the respondent-facing renderer.
#[derive(Debug, Clone, Serialize)]
pub struct LinkResponse {
    pub token: String,
    pub state: SurveyState,
    pub answered: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<usize>,
}

impl From<LinkView> for LinkResponse {
    fn from(view: LinkView) -> Self {
        Self {
            token: view.token.to_string(),
            state: view.state,
            answered: view.answered,
            total: view.total,
        }
    }
}

/// One recorded answer, joined with its question.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerResponse {
    pub question_id: String,
    pub question: String,
    pub answer: String,
}

impl From<AnswerView> for AnswerResponse {
    fn from(view: AnswerView) -> Self {
        Self {
            question_id: view.question_id.to_string(),
            question: view.question,
            answer: view.answer,
        }
    }
}
