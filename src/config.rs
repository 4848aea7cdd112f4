//! Configuration management for the WaSend MCP Server.
//!
//! This module handles loading and validating configuration from environment
//! variables. Loading never prints to stdout, which belongs to the MCP
//! transport.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Configuration for the WaSend MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address-book provider base URL
    pub address_book_url: String,

    /// Address-book provider API key
    pub address_book_api_key: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Maximum number of contacts returned per lookup (default: 10)
    pub max_contact_results: usize,

    /// Minimum combined digit count for a dispatchable number (default: 8)
    pub min_number_digits: usize,

    /// Country code applied when the caller supplies none (default: "91")
    pub default_country_code: String,

    /// Whether to fall back to the wa.me web URL when no native
    /// WhatsApp package is installed (default: true)
    pub web_fallback: bool,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `ADDRESS_BOOK_API_URL`: Base URL of the address-book provider
    /// - `ADDRESS_BOOK_API_KEY`: API key for the provider
    ///
    /// Optional environment variables:
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `MAX_CONTACT_RESULTS`: Max contacts per lookup (default: 10)
    /// - `MIN_NUMBER_DIGITS`: Minimum dispatchable digit count (default: 8)
    /// - `DEFAULT_COUNTRY_CODE`: Code used when none is given (default: "91")
    /// - `WEB_FALLBACK`: Fall back to wa.me when no app is installed (default: true)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let address_book_url = env::var("ADDRESS_BOOK_API_URL")
            .map_err(|_| ConfigError::MissingVar("ADDRESS_BOOK_API_URL".to_string()))?;

        let address_book_api_key = env::var("ADDRESS_BOOK_API_KEY")
            .map_err(|_| ConfigError::MissingVar("ADDRESS_BOOK_API_KEY".to_string()))?;

        if !address_book_url.starts_with("http://") && !address_book_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        if address_book_api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "ADDRESS_BOOK_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let max_contact_results = Self::parse_env_usize("MAX_CONTACT_RESULTS", 10)?;
        let min_number_digits = Self::parse_env_usize("MIN_NUMBER_DIGITS", 8)?;
        let web_fallback = Self::parse_env_bool("WEB_FALLBACK", true)?;

        let default_country_code =
            env::var("DEFAULT_COUNTRY_CODE").unwrap_or_else(|_| "91".to_string());

        if !default_country_code.chars().all(|c| c.is_ascii_digit()) {
            return Err(ConfigError::InvalidValue {
                var: "DEFAULT_COUNTRY_CODE".to_string(),
                reason: format!("Must be decimal digits, got: {}", default_country_code),
            });
        }

        if min_number_digits == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MIN_NUMBER_DIGITS".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            address_book_url,
            address_book_api_key,
            request_timeout,
            max_contact_results,
            min_number_digits,
            default_country_code,
            web_fallback,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.to_ascii_lowercase().as_str() {
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
            address_book_url: String::new(),
            address_book_api_key: String::new(),
            request_timeout: 10,
            max_contact_results: 10,
            min_number_digits: 8,
            default_country_code: "91".to_string(),
            web_fallback: true,
            log_level: "error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.request_timeout, 10);
        assert_eq!(config.max_contact_results, 10);
        assert_eq!(config.min_number_digits, 8);
        assert_eq!(config.default_country_code, "91");
        assert!(config.web_fallback);
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_url() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_API_URL", "not-a-url");
        guard.set("ADDRESS_BOOK_API_KEY", "test-key");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "ADDRESS_BOOK_API_URL");
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_api_key() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_API_URL", "https://contacts.example.com");
        guard.set("ADDRESS_BOOK_API_KEY", "   ");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "ADDRESS_BOOK_API_KEY");
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_API_URL", "https://contacts.example.com");
        guard.set("ADDRESS_BOOK_API_KEY", "test-key");
        guard.set("MAX_CONTACT_RESULTS", "25");
        guard.set("MIN_NUMBER_DIGITS", "10");
        guard.set("DEFAULT_COUNTRY_CODE", "44");
        guard.set("WEB_FALLBACK", "false");

        let config = Config::from_env().expect("config should load");
        assert_eq!(config.address_book_url, "https://contacts.example.com");
        assert_eq!(config.max_contact_results, 25);
        assert_eq!(config.min_number_digits, 10);
        assert_eq!(config.default_country_code, "44");
        assert!(!config.web_fallback);
    }

    #[test]
    #[serial]
    fn test_config_rejects_non_numeric_country_code() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_API_URL", "https://contacts.example.com");
        guard.set("ADDRESS_BOOK_API_KEY", "test-key");
        guard.set("DEFAULT_COUNTRY_CODE", "+91");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "DEFAULT_COUNTRY_CODE");
        }
    }

    #[test]
    #[serial]
    fn test_config_rejects_bad_bool() {
        let mut guard = EnvGuard::new();
        guard.set("ADDRESS_BOOK_API_URL", "https://contacts.example.com");
        guard.set("ADDRESS_BOOK_API_KEY", "test-key");
        guard.set("WEB_FALLBACK", "maybe");

        let result = Config::from_env();
        assert!(result.is_err());
        if let Err(ConfigError::InvalidValue { var, .. }) = result {
            assert_eq!(var, "WEB_FALLBACK");
        }
    }
}
