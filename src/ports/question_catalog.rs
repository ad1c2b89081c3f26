//! Question catalog port.
//!
//! The catalog is an ordered collection of questions owned by the admin
//! side. The engine only ever reads it once per session, at start time,
//! to take the snapshot the session is bound to.

use crate::domain::catalog::Question;
use crate::domain::survey::SurveyError;
use async_trait::async_trait;

/// Port for the question catalog.
///
/// Implementations must return questions in insertion order; that order
/// is the canonical traversal order for every session.
#[async_trait]
pub trait QuestionCatalog: Send + Sync {
    /// List all questions in insertion order.
    async fn list(&self) -> Result<Vec<Question>, SurveyError>;

    /// Append a question to the catalog (admin authoring).
    ///
    /// # Errors
    ///
    /// - `Storage` on persistence failure
    async fn append(&self, question: Question) -> Result<(), SurveyError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_catalog_is_object_safe() {
        fn _accepts_dyn(_catalog: &dyn QuestionCatalog) {}
    }
}
