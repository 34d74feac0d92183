//! DTOs for catalog endpoints.

use serde::Serialize;

use crate::domain::catalog::Category;

/// Cities with active listings.
#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub locations: Vec<&'static str>,
}

/// Available rental categories.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<Category>,
}
