//! IssueLinkHandler - mints a survey token and its pending session.

use std::sync::Arc;

use crate::domain::foundation::SurveyToken;
use crate::domain::survey::{SurveyError, SurveySession};
use crate::ports::SessionStore;

/// Handler for issuing shareable survey links.
pub struct IssueLinkHandler {
    store: Arc<dyn SessionStore>,
}

impl IssueLinkHandler {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Mint a token and persist its pending session.
    ///
    /// The session record is durable before the token is returned, so a
    /// returned token is always redeemable.
    pub async fn handle(&self) -> Result<SurveyToken, SurveyError> {
        let token = SurveyToken::mint();
        let session = SurveySession::new(token.clone());

        self.store.insert(&session).await?;

        tracing::info!(token = %token, "issued survey link");
        Ok(token)
    }
}
