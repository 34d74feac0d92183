//! API route configuration.

use crate::api::handlers::{categories_handler, inquiry_handler, locations_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes.
///
/// # Endpoints
///
/// - `POST /inquiries`           - Build a deep link for an inquiry
/// - `GET  /catalog/locations`   - Cities with active listings
/// - `GET  /catalog/categories`  - Rental categories
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/inquiries", post(inquiry_handler))
        .route("/catalog/locations", get(locations_handler))
        .route("/catalog/categories", get(categories_handler))
}
