//! HTTP endpoints for survey links and chat turns.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::SurveyHandlers;
pub use routes::survey_routes;
