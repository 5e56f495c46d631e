//! REST routes merged into the fullstack server router.

pub mod favorites_routes;
pub mod properties_routes;

use axum::{Router, routing::get};

pub fn api_router() -> Router {
    Router::new()
        .route("/api/properties", get(properties_routes::list_properties))
        .route("/api/properties/filters", get(properties_routes::filter_schema))
        .route(
            "/api/favorites",
            axum::routing::post(favorites_routes::add_favorite).delete(favorites_routes::remove_favorite),
        )
}
