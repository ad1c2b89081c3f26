//! In-memory question catalog adapter.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::catalog::Question;
use crate::domain::survey::SurveyError;
use crate::ports::QuestionCatalog;

/// In-memory ordered question collection.
///
/// A `Vec` keeps insertion order, which is the canonical traversal order.
#[derive(Debug, Clone)]
pub struct InMemoryQuestionCatalog {
    questions: Arc<RwLock<Vec<Question>>>,
}

impl InMemoryQuestionCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self {
            questions: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a catalog pre-seeded with questions (useful for tests and demos).
    pub fn seeded(questions: Vec<Question>) -> Self {
        Self {
            questions: Arc::new(RwLock::new(questions)),
        }
    }
}

impl Default for InMemoryQuestionCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionCatalog for InMemoryQuestionCatalog {
    async fn list(&self) -> Result<Vec<Question>, SurveyError> {
        Ok(self.questions.read().await.clone())
    }

    async fn append(&self, question: Question) -> Result<(), SurveyError> {
        self.questions.write().await.push(question);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(text: &str) -> Question {
        Question::new(text.to_string(), None).unwrap()
    }

    #[tokio::test]
    async fn append_preserves_insertion_order() {
        let catalog = InMemoryQuestionCatalog::new();
        catalog.append(question("A?")).await.unwrap();
        catalog.append(question("B?")).await.unwrap();
        catalog.append(question("C?")).await.unwrap();

        let listed = catalog.list().await.unwrap();
        let texts: Vec<&str> = listed.iter().map(|q| q.text()).collect();
        assert_eq!(texts, vec!["A?", "B?", "C?"]);
    }

    #[tokio::test]
    async fn seeded_catalog_lists_its_seed() {
        let catalog = InMemoryQuestionCatalog::seeded(vec![question("Name?")]);
        assert_eq!(catalog.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_returns_a_snapshot_not_a_live_view() {
        let catalog = InMemoryQuestionCatalog::new();
        catalog.append(question("A?")).await.unwrap();

        let snapshot = catalog.list().await.unwrap();
        catalog.append(question("B?")).await.unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(catalog.list().await.unwrap().len(), 2);
    }
}
