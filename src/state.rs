use std::sync::Arc;

use crate::application::services::InquiryService;
use crate::domain::catalog::Catalog;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub inquiries: Arc<InquiryService>,
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(inquiries: Arc<InquiryService>, catalog: Arc<Catalog>) -> Self {
        Self { inquiries, catalog }
    }
}
