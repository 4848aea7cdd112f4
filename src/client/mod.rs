//! HTTP client for the address-book provider.
//!
//! This module provides a synchronous HTTP client that can be used from async
//! contexts via `tokio::task::spawn_blocking`. The client handles
//! authentication, error mapping, and the free-text filter query the provider
//! exposes over display names and numbers.

mod async_wrapper;
pub use async_wrapper::{AsyncAddressBookClient, AsyncAddressBookClientImpl};

use crate::config::Config;
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::ContactRecord;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;

/// Response wrapper for the provider's contacts endpoint.
#[derive(Debug, Deserialize)]
pub struct ContactsResponse {
    /// The matching contact records, ordered by display name ascending
    pub contacts: Vec<ContactRecord>,
}

/// HTTP client for the address-book provider.
///
/// Uses `ureq` for synchronous requests; call through
/// [`AsyncAddressBookClient`] from async contexts.
#[derive(Clone)]
pub struct AddressBookClient {
    /// Base URL for the provider
    base_url: String,

    /// API key for authentication
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl AddressBookClient {
    /// Create a new AddressBookClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.address_book_url.clone(),
            api_key: config.address_book_api_key.clone(),
            agent: Arc::new(agent),
        }
    }

    /// Create a client with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
        }
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request with authentication.
    fn get(&self, path: &str) -> Result<ureq::Response, AddressBookError> {
        let url = self.build_url(path);
        tracing::debug!("GET {}", url);

        self.agent
            .get(&url)
            .set("x-addressbook-api-key", &self.api_key)
            .set("Content-Type", "application/json")
            .call()
            .map_err(|e| self.map_error(e))
    }

    /// Map a ureq error to an AddressBookError.
    fn map_error(&self, error: ureq::Error) -> AddressBookError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 => AddressBookError::Unauthorized,
                    _ => AddressBookError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    AddressBookError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    AddressBookError::Timeout
                } else {
                    AddressBookError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Search contacts with a free-text filter over display name and number.
    ///
    /// The provider matches the filter against both fields and returns results
    /// ordered by display name ascending.
    pub fn search_contacts(
        &self,
        filter: &str,
        limit: usize,
    ) -> AddressBookResult<Vec<ContactRecord>> {
        let path = format!(
            "/v1/contacts?filter={}&limit={}",
            urlencoding::encode(filter),
            limit
        );
        let response = self.get(&path)?;
        let body = response
            .into_string()
            .map_err(|e| AddressBookError::HttpError(e.to_string()))?;

        let contacts_response: ContactsResponse =
            serde_json::from_str(&body).map_err(AddressBookError::JsonError)?;

        Ok(contacts_response.contacts)
    }
}
