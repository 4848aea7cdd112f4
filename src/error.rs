//! Error types for the WaSend MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when talking to the address-book provider.
#[derive(Error, Debug)]
pub enum AddressBookError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Provider returned an error status code
    #[error("Address book error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Generic provider error with context
    #[error("Address book error: {0}")]
    Other(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that can occur while dispatching a message.
///
/// Validation failures and launch failures are reported separately: the first
/// asks the user to re-enter their input, the second advises installing a
/// handler for the target URI.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The recipient or message failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The platform could not resolve a handler for the constructed URI
    #[error("Could not open WhatsApp: {0}. Try installing WhatsApp.")]
    LaunchFailed(String),
}

/// Convenience type alias for Results with AddressBookError
pub type AddressBookResult<T> = Result<T, AddressBookError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with DispatchError
pub type DispatchResult<T> = Result<T, DispatchError>;
