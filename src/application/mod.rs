//! Application layer - command and query handlers.

pub mod handlers;
