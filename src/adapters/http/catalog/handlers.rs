//! HTTP handlers for catalog endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::survey_error_response;
use crate::application::handlers::{
    CreateQuestionCommand, CreateQuestionHandler, ListQuestionsHandler,
};

use super::dto::{CreateQuestionRequest, QuestionResponse};

#[derive(Clone)]
pub struct CatalogHandlers {
    list_handler: Arc<ListQuestionsHandler>,
    create_handler: Arc<CreateQuestionHandler>,
}

impl CatalogHandlers {
    pub fn new(
        list_handler: Arc<ListQuestionsHandler>,
        create_handler: Arc<CreateQuestionHandler>,
    ) -> Self {
        Self {
            list_handler,
            create_handler,
        }
    }
}

/// GET /api/questions - List catalog questions in insertion order
pub async fn list_questions(State(handlers): State<CatalogHandlers>) -> Response {
    match handlers.list_handler.handle().await {
        Ok(questions) => {
            let response: Vec<QuestionResponse> =
                questions.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => survey_error_response(e),
    }
}

/// POST /api/questions - Author a new question
pub async fn create_question(
    State(handlers): State<CatalogHandlers>,
    Json(req): Json<CreateQuestionRequest>,
) -> Response {
    let cmd = CreateQuestionCommand {
        text: req.text,
        guideline: req.guideline,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(question) => {
            let response: QuestionResponse = question.into();
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => survey_error_response(e),
    }
}
