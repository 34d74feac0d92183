//! Handlers for catalog endpoints.

use axum::{Json, extract::State};

use crate::api::dto::catalog::{CategoriesResponse, LocationsResponse};
use crate::state::AppState;

/// Lists cities with active listings.
///
/// # Endpoint
///
/// `GET /api/catalog/locations`
pub async fn locations_handler(State(state): State<AppState>) -> Json<LocationsResponse> {
    Json(LocationsResponse {
        locations: state.catalog.locations().to_vec(),
    })
}

/// Lists available rental categories.
///
/// # Endpoint
///
/// `GET /api/catalog/categories`
pub async fn categories_handler(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.catalog.categories().to_vec(),
    })
}
