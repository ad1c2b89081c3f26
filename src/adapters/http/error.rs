//! HTTP error mapping shared by all endpoint groups.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::survey::SurveyError;

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Maps a [`SurveyError`] to its HTTP status and body.
///
/// - unknown/expired token -> 404
/// - wrong phase, replay, lost race -> 409
/// - empty answer, invalid admin input -> 400
/// - composer timeout/failure -> 502
/// - integrity fault, storage failure -> 500
pub fn survey_error_response(error: SurveyError) -> Response {
    let status = match &error {
        SurveyError::InvalidToken(_) => StatusCode::NOT_FOUND,
        SurveyError::InvalidState(_) => StatusCode::CONFLICT,
        SurveyError::EmptyAnswer => StatusCode::BAD_REQUEST,
        SurveyError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
        SurveyError::Composer(_) => StatusCode::BAD_GATEWAY,
        SurveyError::Integrity(_) => StatusCode::INTERNAL_SERVER_ERROR,
        SurveyError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!(code = error.code(), "request failed: {}", error);
    }

    let body = ErrorResponse::new(error.code(), error.message());
    (status, Json(body)).into_response()
}
