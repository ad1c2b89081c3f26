//! SurveyState enum for tracking the lifecycle of a survey session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle state of a survey session.
///
/// A session moves strictly forward: `Pending` (token issued, no prompt
/// shown yet) -> `Active` (prompts and answers alternate) -> `Completed`
/// (terminal). No transition leaves `Completed`; restarting a survey
/// requires issuing a new token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SurveyState {
    #[default]
    Pending,
    Active,
    Completed,
}

impl SurveyState {
    /// Returns true if the session is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SurveyState::Completed)
    }

    /// Validates a transition from this state to another.
    ///
    /// Valid transitions:
    /// - Pending -> Active
    /// - Pending -> Completed (empty catalog at start)
    /// - Active -> Completed
    pub fn can_transition_to(&self, target: &SurveyState) -> bool {
        use SurveyState::*;
        matches!(
            (self, target),
            (Pending, Active) | (Pending, Completed) | (Active, Completed)
        )
    }
}

impl fmt::Display for SurveyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SurveyState::Pending => "Pending",
            SurveyState::Active => "Active",
            SurveyState::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}
