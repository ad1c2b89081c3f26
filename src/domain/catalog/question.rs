//! Question entity.
//!
//! Questions are authored by the administrator and immutable once created.
//! Catalog insertion order is the canonical traversal order for every
//! session started against the catalog.

use crate::domain::foundation::QuestionId;
use crate::domain::survey::SurveyError;
use serde::{Deserialize, Serialize};

/// Maximum length for question text.
pub const MAX_QUESTION_LENGTH: usize = 2000;

/// A single survey question.
///
/// The optional guideline is shown to the respondent-facing renderer and
/// fed to the response composer; it never participates in sequencing logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    text: String,
    guideline: Option<String>,
}

impl Question {
    /// Create a new question with a fresh identifier.
    ///
    /// # Errors
    ///
    /// - `Validation` if text is empty or too long
    pub fn new(text: String, guideline: Option<String>) -> Result<Self, SurveyError> {
        Self::validate_text(&text)?;

        let guideline = guideline.filter(|g| !g.trim().is_empty());
        Ok(Self {
            id: QuestionId::new(),
            text,
            guideline,
        })
    }

    /// Reconstitute a question from persistence (no validation).
    pub fn reconstitute(id: QuestionId, text: String, guideline: Option<String>) -> Self {
        Self {
            id,
            text,
            guideline,
        }
    }

    /// Returns the question ID.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Returns the prompt text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the authoring guideline, if any.
    pub fn guideline(&self) -> Option<&str> {
        self.guideline.as_deref()
    }

    fn validate_text(text: &str) -> Result<(), SurveyError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(SurveyError::validation("text", "Question text cannot be empty"));
        }
        if trimmed.len() > MAX_QUESTION_LENGTH {
            return Err(SurveyError::validation(
                "text",
                format!("Question text must be {} characters or less", MAX_QUESTION_LENGTH),
            ));
        }
        Ok(())
    }
}
