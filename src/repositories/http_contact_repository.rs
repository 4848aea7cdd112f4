use crate::client::AsyncAddressBookClient;
use crate::error::AddressBookResult;
use crate::models::ContactRecord;
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Contact repository backed by the address-book HTTP provider.
///
/// Delegates to the [`AsyncAddressBookClient`], keeping the business logic
/// independent of the underlying HTTP client.
pub struct HttpContactRepository {
    client: Arc<dyn AsyncAddressBookClient>,
}

impl HttpContactRepository {
    /// Create a new HttpContactRepository with the given client.
    pub fn new(client: Arc<dyn AsyncAddressBookClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContactRepository for HttpContactRepository {
    async fn search(&self, filter: &str, limit: usize) -> AddressBookResult<Vec<ContactRecord>> {
        self.client.search_contacts(filter, limit).await
    }
}
