//! Handler for inquiry link building.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::inquiry::{InquiryRequest, InquiryResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Builds a WhatsApp deep link for a structured inquiry.
///
/// # Endpoint
///
/// `POST /api/inquiries`
///
/// # Request Body
///
/// ```json
/// {
///   "variant": "filtered_search",
///   "location": "Pune",        // optional
///   "category": "pg",          // optional, catalog id or free text
///   "min_price": "8000",       // optional
///   "max_price": "15000"       // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "variant": "filtered_search",
///   "message": "Hi! I'm looking for rental properties...",
///   "link": "https://wa.me/919990997837?text=Hi%21%20..."
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails, including the Feedback
/// variant's rating/text rules. All other variants accept any combination
/// of absent fields.
pub async fn inquiry_handler(
    State(state): State<AppState>,
    Json(payload): Json<InquiryRequest>,
) -> Result<Json<InquiryResponse>, AppError> {
    payload.validate()?;

    let variant = payload.variant;
    let fields = payload.fields.into_fields(&state.catalog);
    let link = state.inquiries.build_link(variant, &fields)?;

    Ok(Json(InquiryResponse {
        variant,
        message: link.message,
        link: link.url,
    }))
}
