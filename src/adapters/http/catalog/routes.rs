//! HTTP routes for catalog endpoints.

use axum::{routing::get, Router};

use super::handlers::{create_question, list_questions, CatalogHandlers};

/// Creates the catalog router.
pub fn catalog_routes(handlers: CatalogHandlers) -> Router {
    Router::new()
        .route("/", get(list_questions).post(create_question))
        .with_state(handlers)
}
