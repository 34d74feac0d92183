#![allow(dead_code)]

use std::sync::Arc;

use inquiry_gateway::domain::catalog::Catalog;
use inquiry_gateway::prelude::{AppState, Destination, InquiryService};

pub const TEST_NUMBER: &str = "919990997837";

pub fn create_test_state() -> AppState {
    let destination = Destination::new(TEST_NUMBER).unwrap();
    let service = Arc::new(InquiryService::new("wa.me".to_string(), destination));

    AppState::new(service, Arc::new(Catalog::new()))
}

/// Extracts and percent-decodes the `text` query parameter from a deep link.
pub fn decode_text_param(link: &str) -> String {
    let url = url::Url::parse(link).unwrap();
    let (key, encoded) = url.query().unwrap().split_once('=').unwrap();
    assert_eq!(key, "text");

    urlencoding::decode(encoded).unwrap().into_owned()
}
