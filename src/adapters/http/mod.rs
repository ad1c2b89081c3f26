//! HTTP adapters - axum routes, handlers, and DTOs.

pub mod catalog;
mod error;
pub mod survey;

pub use error::{survey_error_response, ErrorResponse};

use axum::Router;

use catalog::{catalog_routes, CatalogHandlers};
use survey::{survey_routes, SurveyHandlers};

/// Assembles the full API router.
pub fn api_router(survey: SurveyHandlers, catalog: CatalogHandlers) -> Router {
    Router::new()
        .nest("/api/links", survey_routes(survey))
        .nest("/api/questions", catalog_routes(catalog))
}
