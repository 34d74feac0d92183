//! WhatsApp deep-link assembly.
//!
//! A deep link is `https://<messaging-domain>/<digits>?text=<encoded>` where
//! the message body is percent-encoded losslessly (newlines and emoji
//! included). Building a link is pure string work; opening it is the
//! caller's concern.

use regex::Regex;
use std::sync::LazyLock;

/// Destination numbers are bare E.164 digits, no `+` or separators.
static DESTINATION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{8,15}$").unwrap());

/// Errors that can occur when constructing a [`Destination`].
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DestinationError {
    #[error("Destination must be 8-15 digits without separators, got '{0}'")]
    InvalidNumber(String),
}

/// Validated destination contact number.
///
/// Immutable once constructed; the service holds a single destination for
/// its whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination(String);

impl Destination {
    /// Validates and wraps a phone number given as bare digits.
    ///
    /// # Errors
    ///
    /// Returns [`DestinationError::InvalidNumber`] when the input is not
    /// 8-15 ASCII digits.
    pub fn new(digits: impl Into<String>) -> Result<Self, DestinationError> {
        let digits = digits.into();
        if !DESTINATION_REGEX.is_match(&digits) {
            return Err(DestinationError::InvalidNumber(digits));
        }
        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Builds the deep-link URL for a rendered message.
///
/// Encoding follows `encodeURIComponent` semantics, so the produced query
/// value never contains literal spaces or newlines and decodes back to the
/// exact message. Deterministic: identical inputs yield identical URLs.
pub fn build_deep_link(messaging_domain: &str, destination: &Destination, message: &str) -> String {
    format!(
        "https://{}/{}?text={}",
        messaging_domain.trim_end_matches('/'),
        destination.as_str(),
        urlencoding::encode(message)
    )
}
