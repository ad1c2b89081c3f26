//! Question catalog entities.

mod question;

pub use question::{Question, MAX_QUESTION_LENGTH};
