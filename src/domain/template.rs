//! Message templates for each inquiry variant.
//!
//! Templates produce the human-readable WhatsApp message body. The `*bold*`
//! markers and emoji prefixes are literal message content, not markup the
//! renderer interprets. Absent optional fields drop their line entirely;
//! there is no "not specified" placeholder.

use crate::domain::inquiry::{InquiryFields, InquiryVariant};

/// Errors raised by feedback field validation.
///
/// Only the [`InquiryVariant::Feedback`] variant validates its fields; every
/// other variant renders a minimal valid message from whatever is present.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),

    #[error("Feedback text must not be empty")]
    EmptyFeedback,
}

/// Renders the message body for a variant.
///
/// # Errors
///
/// Returns [`TemplateError`] only for the Feedback variant, when the rating
/// is missing or outside 1..=5, or when the feedback text is missing or
/// blank.
pub fn render(variant: InquiryVariant, fields: &InquiryFields) -> Result<String, TemplateError> {
    let message = match variant {
        InquiryVariant::LocationSearch => render_location_search(fields),
        InquiryVariant::FilteredSearch => render_filtered_search(fields),
        InquiryVariant::CategoryInquiry => render_category_inquiry(fields),
        InquiryVariant::PropertyInquiry => render_property_inquiry(fields),
        InquiryVariant::VisitRequest => render_visit_request(fields),
        InquiryVariant::SupportRequest => "Hi! I need help with RentEase.\n\nMy issue is: ".to_string(),
        InquiryVariant::Feedback => render_feedback(fields)?,
        InquiryVariant::GeneralInquiry => "Hi! I have a question about RentEase.\n\n".to_string(),
        InquiryVariant::PartnershipInquiry => {
            "Hi! I'm interested in listing my property on RentEase.\n\nPlease share the details on how I can become a partner.\n\nThank you!"
                .to_string()
        }
    };

    Ok(message)
}

/// Treats whitespace-only values the same as absent ones.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

fn render_location_search(fields: &InquiryFields) -> String {
    let opening = match present(&fields.location) {
        Some(location) => format!("Hi! I'm looking for rental properties in *{}*.", location),
        None => "Hi! I'm looking for rental properties.".to_string(),
    };

    format!(
        "{}\n\nPlease share available options for:\n- Houses/Flats\n- PGs/Hostels\n- Co-working spaces\n- Library seats\n\nThank you!",
        opening
    )
}

fn render_filtered_search(fields: &InquiryFields) -> String {
    let mut message =
        String::from("Hi! I'm looking for rental properties with the following requirements:\n\n");

    if let Some(location) = present(&fields.location) {
        message.push_str(&format!("\u{1F4CD} *Location:* {}\n", location));
    }
    if let Some(category) = present(&fields.category) {
        message.push_str(&format!("\u{1F3F7}\u{FE0F} *Category:* {}\n", category));
    }
    if let Some(min_price) = present(&fields.min_price) {
        message.push_str(&format!("\u{1F4B0} *Min Budget:* \u{20B9}{}/month\n", min_price));
    }
    if let Some(max_price) = present(&fields.max_price) {
        message.push_str(&format!("\u{1F4B0} *Max Budget:* \u{20B9}{}/month\n", max_price));
    }

    message.push_str("\nPlease share available options. Thank you!");
    message
}

fn render_category_inquiry(fields: &InquiryFields) -> String {
    let opening = match present(&fields.category) {
        Some(category) => format!("Hi! I'm interested in *{}* rentals.", category),
        None => "Hi! I'm interested in rental options.".to_string(),
    };

    format!(
        "{}\n\nPlease share available options in my area.\n\nThank you!",
        opening
    )
}

fn render_property_inquiry(fields: &InquiryFields) -> String {
    let mut message = String::from("Hi! I'm interested in this property:\n\n");
    message.push_str(&property_lines(fields));
    message.push_str(
        "\nPlease share more details about:\n- Availability\n- Amenities\n- Visit schedule\n\nThank you!",
    );
    message
}

fn render_visit_request(fields: &InquiryFields) -> String {
    let mut message = String::from("Hi! I'd like to schedule a visit for:\n\n");
    message.push_str(&property_lines(fields));
    message.push_str("\nPlease let me know available dates and timings.\n\nThank you!");
    message
}

/// Shared 🏠/📍/💰 line block for property-centric variants.
///
/// The visit request never carries a price, so the price line simply stays
/// absent there.
fn property_lines(fields: &InquiryFields) -> String {
    let mut lines = String::new();

    if let Some(name) = present(&fields.property_name) {
        lines.push_str(&format!("\u{1F3E0} *{}*\n", name));
    }
    if let Some(location) = present(&fields.location) {
        lines.push_str(&format!("\u{1F4CD} {}\n", location));
    }
    if let Some(price) = present(&fields.price) {
        lines.push_str(&format!("\u{1F4B0} \u{20B9}{}/month\n", price));
    }

    lines
}

fn render_feedback(fields: &InquiryFields) -> Result<String, TemplateError> {
    let rating = fields.rating.unwrap_or(0);
    if !(1..=5).contains(&rating) {
        return Err(TemplateError::RatingOutOfRange(rating));
    }

    let feedback_text = present(&fields.feedback_text).ok_or(TemplateError::EmptyFeedback)?;

    let mut message = format!(
        "Hi! Here's my feedback for RentEase:\n\n\u{2B50} *Rating:* {}/5\n",
        rating
    );

    if let Some(name) = present(&fields.name) {
        message.push_str(&format!("\u{1F464} *Name:* {}\n", name));
    }

    message.push_str(&format!("\n\u{1F4DD} *Feedback:*\n{}", feedback_text));
    Ok(message)
}
