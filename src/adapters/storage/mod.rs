//! Storage adapters.

mod in_memory_catalog;
mod in_memory_session_store;

pub use in_memory_catalog::InMemoryQuestionCatalog;
pub use in_memory_session_store::InMemorySessionStore;
