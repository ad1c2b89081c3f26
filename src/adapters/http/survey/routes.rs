//! HTTP routes for survey endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    get_link, issue_link, list_answers, start_session, submit_message, SurveyHandlers,
};

/// Creates the survey router with all link-scoped endpoints.
pub fn survey_routes(handlers: SurveyHandlers) -> Router {
    Router::new()
        .route("/", post(issue_link))
        .route("/:token", get(get_link))
        .route("/:token/start", post(start_session))
        .route("/:token/message", post(submit_message))
        .route("/:token/answers", get(list_answers))
        .with_state(handlers)
}
