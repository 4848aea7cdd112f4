//! Async wrapper around the synchronous AddressBookClient.
//!
//! Runs the blocking HTTP call on the tokio blocking thread pool via
//! `tokio::task::spawn_blocking` so provider queries never stall the async
//! runtime the MCP server lives on.

use crate::client::AddressBookClient;
use crate::error::{AddressBookError, AddressBookResult};
use crate::models::ContactRecord;
use async_trait::async_trait;
use std::sync::Arc;

/// Async interface to the address-book provider.
#[async_trait]
pub trait AsyncAddressBookClient: Send + Sync {
    async fn search_contacts(
        &self,
        filter: &str,
        limit: usize,
    ) -> AddressBookResult<Vec<ContactRecord>>;
}

/// Async wrapper around [`AddressBookClient`].
#[derive(Clone)]
pub struct AsyncAddressBookClientImpl {
    client: Arc<AddressBookClient>,
}

impl AsyncAddressBookClientImpl {
    pub fn new(client: AddressBookClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncAddressBookClient for AsyncAddressBookClientImpl {
    async fn search_contacts(
        &self,
        filter: &str,
        limit: usize,
    ) -> AddressBookResult<Vec<ContactRecord>> {
        let client = self.client.clone();
        let filter = filter.to_string();

        tokio::task::spawn_blocking(move || client.search_contacts(&filter, limit))
            .await
            .map_err(|e| AddressBookError::HttpError(format!("Task join error: {}", e)))?
    }
}
