//! Foundation module - Shared domain primitives.
//!
//! Contains the value objects that form the vocabulary of the survey domain:
//! identifiers, tokens, timestamps, and the session lifecycle state.

mod ids;
mod survey_state;
mod timestamp;
mod token;

pub use ids::QuestionId;
pub use survey_state::SurveyState;
pub use timestamp::Timestamp;
pub use token::SurveyToken;
