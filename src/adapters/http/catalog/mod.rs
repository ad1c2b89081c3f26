//! HTTP endpoints for question authoring.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::CatalogHandlers;
pub use routes::catalog_routes;
