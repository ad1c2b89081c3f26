//! HTTP handlers for survey endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::survey_error_response;
use crate::application::handlers::{
    GetLinkHandler, IssueLinkHandler, ListAnswersHandler, StartSessionCommand,
    StartSessionHandler, SubmitMessageCommand, SubmitMessageHandler,
};
use crate::domain::foundation::SurveyToken;

use super::dto::{
    AnswerResponse, ChatMessageRequest, ChatResponse, IssueLinkResponse, LinkResponse,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SurveyHandlers {
    issue_handler: Arc<IssueLinkHandler>,
    get_link_handler: Arc<GetLinkHandler>,
    start_handler: Arc<StartSessionHandler>,
    submit_handler: Arc<SubmitMessageHandler>,
    answers_handler: Arc<ListAnswersHandler>,
}

impl SurveyHandlers {
    pub fn new(
        issue_handler: Arc<IssueLinkHandler>,
        get_link_handler: Arc<GetLinkHandler>,
        start_handler: Arc<StartSessionHandler>,
        submit_handler: Arc<SubmitMessageHandler>,
        answers_handler: Arc<ListAnswersHandler>,
    ) -> Self {
        Self {
            issue_handler,
            get_link_handler,
            start_handler,
            submit_handler,
            answers_handler,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/links - Issue a new shareable survey link
pub async fn issue_link(State(handlers): State<SurveyHandlers>) -> Response {
    match handlers.issue_handler.handle().await {
        Ok(token) => {
            let response = IssueLinkResponse {
                token: token.to_string(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => survey_error_response(e),
    }
}

/// GET /api/links/:token - Resolve a link before the chat opens it
pub async fn get_link(
    State(handlers): State<SurveyHandlers>,
    Path(token): Path<String>,
) -> Response {
    let token = SurveyToken::from_string(token);

    match handlers.get_link_handler.handle(token).await {
        Ok(view) => {
            let response: LinkResponse = view.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => survey_error_response(e),
    }
}

/// POST /api/links/:token/start - Start the survey session
pub async fn start_session(
    State(handlers): State<SurveyHandlers>,
    Path(token): Path<String>,
) -> Response {
    let cmd = StartSessionCommand {
        token: SurveyToken::from_string(token),
    };

    match handlers.start_handler.handle(cmd).await {
        Ok(reply) => {
            let response = ChatResponse { response: reply };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => survey_error_response(e),
    }
}

/// POST /api/links/:token/message - Submit one answer turn
pub async fn submit_message(
    State(handlers): State<SurveyHandlers>,
    Path(token): Path<String>,
    Json(req): Json<ChatMessageRequest>,
) -> Response {
    let cmd = SubmitMessageCommand {
        token: SurveyToken::from_string(token),
        text: req.text,
    };

    match handlers.submit_handler.handle(cmd).await {
        Ok(reply) => {
            let response = ChatResponse { response: reply };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => survey_error_response(e),
    }
}

/// GET /api/links/:token/answers - Recorded answers for this link
pub async fn list_answers(
    State(handlers): State<SurveyHandlers>,
    Path(token): Path<String>,
) -> Response {
    let token = SurveyToken::from_string(token);

    match handlers.answers_handler.handle(token).await {
        Ok(answers) => {
            let response: Vec<AnswerResponse> = answers.into_iter().map(Into::into).collect();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => survey_error_response(e),
    }
}
