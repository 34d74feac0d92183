//! # Inquiry Gateway
//!
//! A WhatsApp deep-link inquiry gateway for rental listings built with Axum.
//!
//! Every operation ends in the construction of a pre-filled
//! `https://wa.me/<digits>?text=<encoded>` URL. There is no database and no
//! persistence; building a link is a pure function of the inquiry fields and
//! an immutable destination configured at startup.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Inquiry model, message templates,
//!   deep-link assembly, and the static listing catalog
//! - **Application Layer** ([`application`]) - The inquiry-to-link service
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! # Set the destination contact
//! export WHATSAPP_NUMBER="919990997837"
//!
//! # Start the service
//! cargo run
//!
//! # Or build a link from the command line
//! cargo run --bin linkgen -- location-search --location Pune
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{InquiryLink, InquiryService};
    pub use crate::domain::catalog::Catalog;
    pub use crate::domain::deep_link::Destination;
    pub use crate::domain::inquiry::{InquiryFields, InquiryVariant};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
