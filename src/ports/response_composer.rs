//! Response composer port.
//!
//! The composer turns the next question (and optionally the answer just
//! recorded) into the outgoing bot message. It is opaque to the engine:
//! it may echo the question text verbatim or call a generative backend.
//!
//! Implementations must bound their own latency; the engine treats any
//! composer failure as recoverable and leaves session state untouched.

use crate::domain::catalog::Question;
use async_trait::async_trait;
use thiserror::Error;

/// Errors raised by a response composer.
#[derive(Debug, Clone, Error)]
pub enum ComposerError {
    #[error("composer timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u64 },

    #[error("composer backend failed: {0}")]
    Backend(String),
}

impl ComposerError {
    /// Creates a backend failure error.
    pub fn backend(message: impl Into<String>) -> Self {
        ComposerError::Backend(message.into())
    }
}

/// Port for conversational prompt composition.
#[async_trait]
pub trait ResponseComposer: Send + Sync {
    /// Produce the outgoing prompt for `question`.
    ///
    /// `prior_answer` carries the answer recorded in the same turn, for
    /// acknowledgement phrasing; it is `None` for the opening prompt.
    async fn compose(
        &self,
        question: &Question,
        prior_answer: Option<&str>,
    ) -> Result<String, ComposerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_composer_is_object_safe() {
        fn _accepts_dyn(_composer: &dyn ResponseComposer) {}
    }

    #[test]
    fn timeout_error_displays_seconds() {
        let err = ComposerError::Timeout { timeout_secs: 10 };
        assert_eq!(format!("{}", err), "composer timed out after 10s");
    }
}
