//! Inquiry-to-link service.

use crate::domain::deep_link::{Destination, build_deep_link};
use crate::domain::inquiry::{InquiryFields, InquiryVariant};
use crate::domain::template;
use crate::error::AppError;

/// A rendered inquiry: the plain message and the deep link carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquiryLink {
    pub message: String,
    pub url: String,
}

/// Builds WhatsApp deep links from structured inquiries.
///
/// Holds the immutable destination and messaging domain set at startup.
/// Each call is stateless and side-effect free; identical inputs always
/// produce identical links.
pub struct InquiryService {
    messaging_domain: String,
    destination: Destination,
}

impl InquiryService {
    pub fn new(messaging_domain: String, destination: Destination) -> Self {
        Self {
            messaging_domain,
            destination,
        }
    }

    /// Renders the variant template and wraps it into a deep link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the Feedback variant is built
    /// with a rating outside 1..=5 or blank feedback text. Every other
    /// variant accepts arbitrary field combinations.
    pub fn build_link(
        &self,
        variant: InquiryVariant,
        fields: &InquiryFields,
    ) -> Result<InquiryLink, AppError> {
        let message = template::render(variant, fields)?;
        let url = build_deep_link(&self.messaging_domain, &self.destination, &message);

        tracing::debug!(variant = variant.as_str(), "Built inquiry link");

        Ok(InquiryLink { message, url })
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn service() -> InquiryService {
        InquiryService::new(
            "wa.me".to_string(),
            Destination::new("919990997837").unwrap(),
        )
    }

    fn decode_text_param(link: &str) -> String {
        let url = Url::parse(link).unwrap();
        let (_, encoded) = url.query().unwrap().split_once('=').unwrap();
        urlencoding::decode(encoded).unwrap().into_owned()
    }

    #[test]
    fn test_all_variants_render_with_empty_fields() {
        let service = service();
        let fields = InquiryFields::default();

        for variant in [
            InquiryVariant::LocationSearch,
            InquiryVariant::FilteredSearch,
            InquiryVariant::CategoryInquiry,
            InquiryVariant::PropertyInquiry,
            InquiryVariant::VisitRequest,
            InquiryVariant::SupportRequest,
            InquiryVariant::GeneralInquiry,
            InquiryVariant::PartnershipInquiry,
        ] {
            let link = service.build_link(variant, &fields).unwrap();
            assert!(!link.url.is_empty());
            assert!(link.url.starts_with("https://wa.me/919990997837?text="));
            assert!(!link.url.contains(' '));
            assert!(!link.url.contains('\n'));
        }
    }

    #[test]
    fn test_link_roundtrips_message() {
        let service = service();
        let link = service
            .build_link(
                InquiryVariant::PropertyInquiry,
                &InquiryFields {
                    property_name: Some("Green Villa".to_string()),
                    location: Some("Noida".to_string()),
                    price: Some("15000".to_string()),
                    ..InquiryFields::default()
                },
            )
            .unwrap();

        assert_eq!(decode_text_param(&link.url), link.message);
    }

    #[test]
    fn test_feedback_validation_propagates() {
        let service = service();
        let result = service.build_link(
            InquiryVariant::Feedback,
            &InquiryFields {
                rating: Some(6),
                feedback_text: Some("ok".to_string()),
                ..InquiryFields::default()
            },
        );

        assert!(matches!(
            result.unwrap_err(),
            AppError::Validation { .. }
        ));
    }

    #[test]
    fn test_identical_inputs_identical_urls() {
        let service = service();
        let fields = InquiryFields {
            location: Some("Pune".to_string()),
            ..InquiryFields::default()
        };

        let a = service
            .build_link(InquiryVariant::LocationSearch, &fields)
            .unwrap();
        let b = service
            .build_link(InquiryVariant::LocationSearch, &fields)
            .unwrap();
        assert_eq!(a.url, b.url);
    }
}
