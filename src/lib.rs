//! Surveyflow - Conversational Survey Backend
//!
//! An administrator authors survey questions and distributes single-use
//! shareable links; a respondent follows a link and answers the questions
//! one turn at a time through a chat interface.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
