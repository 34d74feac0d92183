//! DTOs for inquiry endpoints.
//!
//! This layer is the field collector: it alone maps transport input (JSON
//! body or query string) into domain [`InquiryFields`]. Blank strings are
//! treated as absent, and category ids from filter forms are resolved
//! against the catalog before templating.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::catalog::Catalog;
use crate::domain::inquiry::{InquiryFields, InquiryVariant};

/// Request to build an inquiry link.
#[derive(Debug, Deserialize, Validate)]
pub struct InquiryRequest {
    pub variant: InquiryVariant,

    #[serde(flatten)]
    #[validate(nested)]
    pub fields: InquiryFieldsDto,
}

/// Optional inquiry fields as they arrive on the wire.
///
/// Also used directly for the `/go/{variant}` query string, where every
/// value arrives as text.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct InquiryFieldsDto {
    #[validate(length(max = 120))]
    pub location: Option<String>,

    /// Category id (`pg`, `houses`, ...), `all`, or free text.
    #[validate(length(max = 120))]
    pub category: Option<String>,

    #[validate(length(max = 20))]
    pub min_price: Option<String>,

    #[validate(length(max = 20))]
    pub max_price: Option<String>,

    #[validate(length(max = 200))]
    pub property_name: Option<String>,

    #[validate(length(max = 20))]
    pub price: Option<String>,

    #[validate(range(min = 1, max = 5))]
    pub rating: Option<u8>,

    #[validate(length(max = 2000))]
    pub feedback_text: Option<String>,

    #[validate(length(max = 120))]
    pub name: Option<String>,
}

impl InquiryFieldsDto {
    /// Maps wire fields into domain fields.
    ///
    /// Whitespace-only values become absent. A category of `all` means no
    /// category filter; known catalog ids resolve to their display title;
    /// anything else passes through as free text.
    pub fn into_fields(self, catalog: &Catalog) -> InquiryFields {
        let category = non_blank(self.category).and_then(|raw| catalog.display_title(&raw));

        InquiryFields {
            location: non_blank(self.location),
            category,
            min_price: non_blank(self.min_price),
            max_price: non_blank(self.max_price),
            property_name: non_blank(self.property_name),
            price: non_blank(self.price),
            rating: self.rating,
            feedback_text: non_blank(self.feedback_text),
            name: non_blank(self.name),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Response carrying the rendered message and the deep link.
#[derive(Debug, Serialize)]
pub struct InquiryResponse {
    pub variant: InquiryVariant,
    pub message: String,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_fields_trims_and_drops_blanks() {
        let dto = InquiryFieldsDto {
            location: Some("  Pune ".to_string()),
            property_name: Some("   ".to_string()),
            ..InquiryFieldsDto::default()
        };

        let fields = dto.into_fields(&Catalog::new());
        assert_eq!(fields.location.as_deref(), Some("Pune"));
        assert!(fields.property_name.is_none());
    }

    #[test]
    fn test_into_fields_resolves_category_id() {
        let dto = InquiryFieldsDto {
            category: Some("pg".to_string()),
            ..InquiryFieldsDto::default()
        };

        let fields = dto.into_fields(&Catalog::new());
        assert_eq!(fields.category.as_deref(), Some("PG & Hostels"));
    }

    #[test]
    fn test_into_fields_all_means_no_category() {
        let dto = InquiryFieldsDto {
            category: Some("all".to_string()),
            ..InquiryFieldsDto::default()
        };

        let fields = dto.into_fields(&Catalog::new());
        assert!(fields.category.is_none());
    }

    #[test]
    fn test_rating_range_validation() {
        let dto = InquiryFieldsDto {
            rating: Some(6),
            ..InquiryFieldsDto::default()
        };
        assert!(dto.validate().is_err());

        let dto = InquiryFieldsDto {
            rating: Some(3),
            ..InquiryFieldsDto::default()
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_request_flattens_fields() {
        let request: InquiryRequest = serde_json::from_value(serde_json::json!({
            "variant": "location_search",
            "location": "Pune"
        }))
        .unwrap();

        assert_eq!(request.variant, InquiryVariant::LocationSearch);
        assert_eq!(request.fields.location.as_deref(), Some("Pune"));
    }
}
