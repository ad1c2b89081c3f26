//! Ports layer - contracts between the engine and its collaborators.

mod question_catalog;
mod response_composer;
mod session_store;

pub use question_catalog::QuestionCatalog;
pub use response_composer::{ComposerError, ResponseComposer};
pub use session_store::SessionStore;
