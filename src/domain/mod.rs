//! Core domain types: inquiry model, message templates, deep links, and the
//! static listing catalog.

pub mod catalog;
pub mod deep_link;
pub mod inquiry;
pub mod template;
