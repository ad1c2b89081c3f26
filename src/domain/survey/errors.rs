//! Survey-specific error types.

use crate::domain::foundation::SurveyToken;

/// Errors raised by the survey session engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyError {
    /// Token absent from the session store (or expired).
    InvalidToken(SurveyToken),
    /// Call made in the wrong lifecycle phase, including replay and
    /// lost-race attempts.
    InvalidState(String),
    /// Answer text was empty or whitespace-only.
    EmptyAnswer,
    /// The response composer timed out or failed; session state unchanged.
    Composer(String),
    /// Client input validation failed.
    ValidationFailed { field: String, message: String },
    /// The engine produced an index with no matching question. Indices are
    /// only ever produced by the engine itself, so this is a fatal fault.
    Integrity(String),
    /// Storage I/O failure; fatal for the request, no partial writes.
    Storage(String),
}

impl SurveyError {
    pub fn invalid_token(token: SurveyToken) -> Self {
        SurveyError::InvalidToken(token)
    }
    pub fn invalid_state(message: impl Into<String>) -> Self {
        SurveyError::InvalidState(message.into())
    }
    pub fn empty_answer() -> Self {
        SurveyError::EmptyAnswer
    }
    pub fn composer(message: impl Into<String>) -> Self {
        SurveyError::Composer(message.into())
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        SurveyError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn integrity(message: impl Into<String>) -> Self {
        SurveyError::Integrity(message.into())
    }
    pub fn storage(message: impl Into<String>) -> Self {
        SurveyError::Storage(message.into())
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> &'static str {
        match self {
            SurveyError::InvalidToken(_) => "INVALID_TOKEN",
            SurveyError::InvalidState(_) => "INVALID_STATE",
            SurveyError::EmptyAnswer => "EMPTY_ANSWER",
            SurveyError::Composer(_) => "COMPOSER_ERROR",
            SurveyError::ValidationFailed { .. } => "VALIDATION_FAILED",
            SurveyError::Integrity(_) => "INTEGRITY_FAULT",
            SurveyError::Storage(_) => "STORAGE_ERROR",
        }
    }

    /// Human-readable message, safe to surface to clients.
    pub fn message(&self) -> String {
        match self {
            SurveyError::InvalidToken(_) => "This survey link is invalid or expired".to_string(),
            SurveyError::InvalidState(msg) => msg.clone(),
            SurveyError::EmptyAnswer => "Answer text cannot be empty".to_string(),
            SurveyError::Composer(msg) => format!("Could not produce the next prompt: {}", msg),
            SurveyError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            SurveyError::Integrity(msg) => format!("Survey integrity fault: {}", msg),
            SurveyError::Storage(msg) => format!("Storage error: {}", msg),
        }
    }
}

impl std::fmt::Display for SurveyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message())
    }
}

impl std::error::Error for SurveyError {}
