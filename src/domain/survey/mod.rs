//! Survey session module - the session aggregate and its error taxonomy.

mod errors;
mod session;

pub use errors::SurveyError;
pub use session::{RecordedAnswer, SurveySession};

/// Fixed completion message returned when the last question is answered
/// (or when a survey starts against an empty catalog).
pub const COMPLETION_MESSAGE: &str = "Survey is finished. Thank you for your time!";
