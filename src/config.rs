//! Configuration management for the inquiry pipeline.
//!
//! This module handles loading and validating configuration from
//! environment variables, with defaults matching the production site.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default WhatsApp recipient (international format, digits only).
const DEFAULT_RECIPIENT: &str = "9779765991313";

/// Default site branding used in the message template.
const DEFAULT_SITE_NAME: &str = "Singati Engineering";

/// Configuration for inquiry composition.
#[derive(Debug, Clone)]
pub struct Config {
    /// WhatsApp recipient identifier (digits only, no '+')
    pub recipient: String,

    /// Site name substituted into the message template
    pub site_name: String,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `INQUIRY_RECIPIENT`: WhatsApp number, digits only (default: the
    ///   production recipient)
    /// - `INQUIRY_SITE_NAME`: branding for the message template
    /// - `LOG_LEVEL`: logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Load .env if present; absence is fine
        let _ = dotenvy::dotenv();

        let recipient =
            env::var("INQUIRY_RECIPIENT").unwrap_or_else(|_| DEFAULT_RECIPIENT.to_string());

        // wa.me links want digits only, no '+' or separators
        if recipient.is_empty() || !recipient.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidValue {
                var: "INQUIRY_RECIPIENT".to_string(),
                reason: "Must contain only digits".to_string(),
            });
        }

        let site_name =
            env::var("INQUIRY_SITE_NAME").unwrap_or_else(|_| DEFAULT_SITE_NAME.to_string());

        if site_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "INQUIRY_SITE_NAME".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            recipient,
            site_name,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            recipient: DEFAULT_RECIPIENT.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            log_level: "error".to_string(),
        }
    }
}
