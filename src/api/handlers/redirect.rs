//! Handler for the deep-link redirect.

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
};
use tracing::debug;
use validator::Validate;

use crate::api::dto::inquiry::InquiryFieldsDto;
use crate::domain::inquiry::InquiryVariant;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects straight into the pre-filled WhatsApp conversation.
///
/// # Endpoint
///
/// `GET /go/{variant}?location=Pune&...`
///
/// This is the seam the site wires buttons to: the browser follows the
/// 307 into the messaging application, so "opening the link" stays outside
/// the builder itself.
///
/// # Errors
///
/// Returns 400 Bad Request for an unknown variant or when Feedback
/// validation fails. The redirect is never issued for an invalid inquiry.
pub async fn redirect_handler(
    Path(variant): Path<InquiryVariant>,
    State(state): State<AppState>,
    Query(query): Query<InquiryFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    query.validate()?;

    let fields = query.into_fields(&state.catalog);
    let link = state.inquiries.build_link(variant, &fields)?;

    debug!(variant = variant.as_str(), "Redirecting to deep link");

    Ok(Redirect::temporary(&link.url))
}
