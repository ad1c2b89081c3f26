//! Echo composer - deterministic prompt composition without a backend.
//!
//! Acknowledges the prior answer (when there is one) and echoes the next
//! question text. Deterministic for identical inputs, so the engine can be
//! tested independently of any generative backend.

use async_trait::async_trait;

use crate::domain::catalog::Question;
use crate::ports::{ComposerError, ResponseComposer};

/// Composer that echoes question text verbatim.
#[derive(Debug, Clone, Default)]
pub struct EchoComposer;

impl EchoComposer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResponseComposer for EchoComposer {
    async fn compose(
        &self,
        question: &Question,
        prior_answer: Option<&str>,
    ) -> Result<String, ComposerError> {
        let prompt = match prior_answer {
            Some(_) => format!("Thanks! Next question: {}", question.text()),
            None => question.text().to_string(),
        };
        Ok(prompt)
    }
}
