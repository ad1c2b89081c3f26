//! Application handlers, one per logical operation.
//!
//! Survey side: issue a link, start the session, submit one answer turn,
//! inspect a link, list a session's recorded answers.
//! Admin side: author and list catalog questions.

mod create_question;
mod get_link;
mod issue_link;
mod list_answers;
mod list_questions;
mod start_session;
mod submit_message;

pub use create_question::{CreateQuestionCommand, CreateQuestionHandler};
pub use get_link::{GetLinkHandler, LinkView};
pub use issue_link::IssueLinkHandler;
pub use list_answers::{AnswerView, ListAnswersHandler};
pub use list_questions::ListQuestionsHandler;
pub use start_session::{StartSessionCommand, StartSessionHandler};
pub use submit_message::{SubmitMessageCommand, SubmitMessageHandler};
