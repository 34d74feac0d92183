//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. The destination number is immutable for the process lifetime.
//!
//! ## Required Variables
//!
//! - `WHATSAPP_NUMBER` - destination contact as bare E.164 digits
//!   (e.g. `919990997837`)
//!
//! ## Optional Variables
//!
//! - `MESSAGING_DOMAIN` - deep-link host (default: `wa.me`)
//! - `LISTEN` - bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - log level (default: `info`)
//! - `LOG_FORMAT` - log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - read client IP from forwarding headers; enable only
//!   behind a trusted reverse proxy (default: `false`)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Destination contact as bare digits. Validated as 8-15 digits.
    pub whatsapp_number: String,
    /// Host used for deep links, normally `wa.me`.
    pub messaging_domain: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP
    /// headers. Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `WHATSAPP_NUMBER` is missing.
    pub fn from_env() -> Result<Self> {
        let whatsapp_number =
            env::var("WHATSAPP_NUMBER").context("WHATSAPP_NUMBER must be set")?;

        let messaging_domain =
            env::var("MESSAGING_DOMAIN").unwrap_or_else(|_| "wa.me".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        Ok(Self {
            whatsapp_number,
            messaging_domain,
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `whatsapp_number` is not 8-15 digits
    /// - `messaging_domain` is empty or carries a scheme
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        if self.whatsapp_number.len() < 8
            || self.whatsapp_number.len() > 15
            || !self.whatsapp_number.bytes().all(|b| b.is_ascii_digit())
        {
            anyhow::bail!(
                "WHATSAPP_NUMBER must be 8-15 digits without separators, got '{}'",
                self.whatsapp_number
            );
        }

        if self.messaging_domain.is_empty() {
            anyhow::bail!("MESSAGING_DOMAIN must not be empty");
        }

        if self.messaging_domain.contains("://") {
            anyhow::bail!(
                "MESSAGING_DOMAIN must be a bare host, got '{}'",
                self.messaging_domain
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary (with the phone number masked).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Messaging domain: {}", self.messaging_domain);
        tracing::info!("  Destination: {}", mask_number(&self.whatsapp_number));
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
    }
}

/// Masks all but the last four digits of a phone number for logging.
fn mask_number(digits: &str) -> String {
    if digits.len() <= 4 {
        return "*".repeat(digits.len());
    }
    let visible = &digits[digits.len() - 4..];
    format!("{}{}", "*".repeat(digits.len() - 4), visible)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            whatsapp_number: "919990997837".to_string(),
            messaging_domain: "wa.me".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            behind_proxy: false,
        }
    }

    #[test]
    fn test_mask_number() {
        assert_eq!(mask_number("919990997837"), "********7837");
        assert_eq!(mask_number("123"), "***");
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        config.whatsapp_number = "12-34".to_string();
        assert!(config.validate().is_err());

        config.whatsapp_number = "919990997837".to_string();

        config.messaging_domain = "https://wa.me".to_string();
        assert!(config.validate().is_err());

        config.messaging_domain = "wa.me".to_string();

        config.log_format = "yaml".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_requires_number() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("WHATSAPP_NUMBER");
        }

        assert!(Config::from_env().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("WHATSAPP_NUMBER", "919990997837");
            env::remove_var("MESSAGING_DOMAIN");
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("BEHIND_PROXY");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.messaging_domain, "wa.me");
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert!(!config.behind_proxy);

        // Cleanup
        unsafe {
            env::remove_var("WHATSAPP_NUMBER");
        }
    }

    #[test]
    #[serial]
    fn test_behind_proxy_parsing() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("WHATSAPP_NUMBER", "919990997837");
            env::set_var("BEHIND_PROXY", "TRUE");
        }

        let config = Config::from_env().unwrap();
        assert!(config.behind_proxy);

        unsafe {
            env::set_var("BEHIND_PROXY", "0");
        }
        let config = Config::from_env().unwrap();
        assert!(!config.behind_proxy);

        // Cleanup
        unsafe {
            env::remove_var("WHATSAPP_NUMBER");
            env::remove_var("BEHIND_PROXY");
        }
    }
}
