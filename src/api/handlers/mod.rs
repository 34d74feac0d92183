//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod catalog;
pub mod health;
pub mod inquiry;
pub mod redirect;

pub use catalog::{categories_handler, locations_handler};
pub use health::health_handler;
pub use inquiry::inquiry_handler;
pub use redirect::redirect_handler;
