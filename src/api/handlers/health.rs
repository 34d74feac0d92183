//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **Destination**: A valid contact number is configured
/// 2. **Catalog**: Listing data is present
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let destination_check = check_destination(&state);
    let catalog_check = check_catalog(&state);

    let all_healthy = destination_check.status == "ok" && catalog_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            destination: destination_check,
            catalog: catalog_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// The destination is validated at startup, so this reports configuration.
fn check_destination(state: &AppState) -> CheckStatus {
    let digits = state.inquiries.destination().as_str();
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!("Configured ({} digits)", digits.len())),
    }
}

fn check_catalog(state: &AppState) -> CheckStatus {
    let locations = state.catalog.locations().len();
    let categories = state.catalog.categories().len();

    if locations == 0 || categories == 0 {
        CheckStatus {
            status: "error".to_string(),
            message: Some("Catalog is empty".to_string()),
        }
    } else {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} locations, {} categories", locations, categories)),
        }
    }
}
