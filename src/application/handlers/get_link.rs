//! GetLinkHandler - link inspection for the respondent-facing renderer.

use std::sync::Arc;

use crate::domain::foundation::{SurveyState, SurveyToken, Timestamp};
use crate::domain::survey::SurveyError;
use crate::ports::SessionStore;

/// Read model for one survey link.
#[derive(Debug, Clone)]
pub struct LinkView {
    pub token: SurveyToken,
    pub state: SurveyState,
    pub answered: usize,
    pub total: Option<usize>,
}

/// Handler for resolving a link before the chat UI opens it.
pub struct GetLinkHandler {
    store: Arc<dyn SessionStore>,
    session_ttl_secs: Option<u64>,
}

impl GetLinkHandler {
    pub fn new(store: Arc<dyn SessionStore>, session_ttl_secs: Option<u64>) -> Self {
        Self {
            store,
            session_ttl_secs,
        }
    }

    /// # Errors
    ///
    /// - `InvalidToken` if the token is unknown or expired
    pub async fn handle(&self, token: SurveyToken) -> Result<LinkView, SurveyError> {
        let session = self
            .store
            .find(&token)
            .await?
            .ok_or_else(|| SurveyError::invalid_token(token.clone()))?;

        if let Some(ttl) = self.session_ttl_secs {
            if session.is_expired(ttl, &Timestamp::now()) {
                return Err(SurveyError::invalid_token(token));
            }
        }

        // Total is unknown until the catalog snapshot is bound at start.
        let total = match session.state() {
            SurveyState::Pending => None,
            _ => Some(session.questions().len()),
        };

        Ok(LinkView {
            token,
            state: session.state(),
            answered: session.answers().len(),
            total,
        })
    }
}
