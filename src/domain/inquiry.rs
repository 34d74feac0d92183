//! Inquiry variants and field bag.

use serde::{Deserialize, Serialize};

/// The purpose of an inquiry. Drives template selection.
///
/// Serialized as snake_case strings (`location_search`, `property_inquiry`, ...)
/// both in JSON bodies and in URL path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryVariant {
    LocationSearch,
    FilteredSearch,
    CategoryInquiry,
    PropertyInquiry,
    VisitRequest,
    SupportRequest,
    Feedback,
    GeneralInquiry,
    PartnershipInquiry,
}

impl InquiryVariant {
    /// Stable snake_case name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LocationSearch => "location_search",
            Self::FilteredSearch => "filtered_search",
            Self::CategoryInquiry => "category_inquiry",
            Self::PropertyInquiry => "property_inquiry",
            Self::VisitRequest => "visit_request",
            Self::SupportRequest => "support_request",
            Self::Feedback => "feedback",
            Self::GeneralInquiry => "general_inquiry",
            Self::PartnershipInquiry => "partnership_inquiry",
        }
    }
}

/// Optional fields collected for an inquiry.
///
/// Every field is independently present or absent. Absent fields drop their
/// template line entirely; there is no placeholder text. The only cross-field
/// rule is enforced at render time: [`InquiryVariant::Feedback`] requires a
/// rating in 1..=5 and non-empty feedback text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryFields {
    pub location: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub property_name: Option<String>,
    pub price: Option<String>,
    pub rating: Option<u8>,
    pub feedback_text: Option<String>,
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_snake_case_roundtrip() {
        for variant in [
            InquiryVariant::LocationSearch,
            InquiryVariant::FilteredSearch,
            InquiryVariant::CategoryInquiry,
            InquiryVariant::PropertyInquiry,
            InquiryVariant::VisitRequest,
            InquiryVariant::SupportRequest,
            InquiryVariant::Feedback,
            InquiryVariant::GeneralInquiry,
            InquiryVariant::PartnershipInquiry,
        ] {
            let json = serde_json::to_string(&variant).unwrap();
            assert_eq!(json, format!("\"{}\"", variant.as_str()));

            let parsed: InquiryVariant = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, variant);
        }
    }

    #[test]
    fn test_unknown_variant_rejected() {
        let result = serde_json::from_str::<InquiryVariant>("\"teleport_request\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_fields_default_all_absent() {
        let fields = InquiryFields::default();
        assert!(fields.location.is_none());
        assert!(fields.rating.is_none());
        assert!(fields.feedback_text.is_none());
    }
}
