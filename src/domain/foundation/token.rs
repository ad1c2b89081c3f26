//! Survey token value object.
//!
//! A token is the sole credential for one respondent's survey attempt.
//! It is minted once at link issuance and never reused across sessions.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque unguessable credential identifying a survey session.
///
/// Minted from a version-4 UUID, which carries 122 bits of randomness;
/// collision and guessing probability are negligible.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SurveyToken(String);

impl SurveyToken {
    /// Mints a new random token.
    pub fn mint() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wraps a token received from a client.
    ///
    /// No format validation is performed: an unknown token is simply
    /// absent from the session store.
    pub fn from_string(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SurveyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
