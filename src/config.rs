//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use crate::services::PhoneEditPolicy;
use std::env;

/// Environment variable selecting the strict phone-edit policy.
pub const STRICT_PHONE_EDITS_VAR: &str = "CONTACT_BOOK_STRICT_PHONE_EDITS";

/// Configuration for the contact book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Validate replacement numbers when editing phones (default: false)
    pub strict_phone_edits: bool,

    /// Log level used when `RUST_LOG` is not set (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_STRICT_PHONE_EDITS`: `true`/`false` (also `1`/`0`,
    ///   `yes`/`no`), default `false`
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env is fine, a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let strict_phone_edits = Self::parse_env_bool(STRICT_PHONE_EDITS_VAR, false)?;
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            strict_phone_edits,
            log_level,
        })
    }

    /// The phone-edit policy selected by this configuration.
    pub fn edit_policy(&self) -> PhoneEditPolicy {
        if self.strict_phone_edits {
            PhoneEditPolicy::Strict
        } else {
            PhoneEditPolicy::Lenient
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            strict_phone_edits: false,
            log_level: "info".to_string(),
        }
    }
}
