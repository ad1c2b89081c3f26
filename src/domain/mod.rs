//! Domain layer - entities, value objects, and the survey state machine.

pub mod catalog;
pub mod foundation;
pub mod survey;
