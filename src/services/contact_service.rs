//! Contact lookup service.
//!
//! Business logic for address-book search: normalize every result's number,
//! drop unusable entries, dedupe, order, and cap.

use crate::error::AddressBookResult;
use crate::models::Contact;
use crate::repositories::ContactRepository;
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;

/// Contact lookup operations.
#[async_trait]
pub trait ContactLookupService: Send + Sync {
    /// Search the address book, returning a capped, deduplicated list of
    /// contacts ordered by display name ascending.
    async fn search(&self, query: &str) -> AddressBookResult<Vec<Contact>>;
}

/// Default implementation of [`ContactLookupService`].
pub struct ContactLookupServiceImpl {
    repository: Arc<dyn ContactRepository>,
    max_results: usize,
}

impl ContactLookupServiceImpl {
    /// Create a new lookup service capping results at `max_results`.
    pub fn new(repository: Arc<dyn ContactRepository>, max_results: usize) -> Self {
        Self {
            repository,
            max_results,
        }
    }
}

#[async_trait]
impl ContactLookupService for ContactLookupServiceImpl {
    async fn search(&self, query: &str) -> AddressBookResult<Vec<Contact>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        // Over-fetch so deduplication does not eat into the cap.
        let records = self.repository.search(query, self.max_results * 2).await?;
        tracing::debug!("Provider returned {} records for {:?}", records.len(), query);

        let mut contacts: Vec<Contact> = records
            .into_iter()
            .map(Contact::from_record)
            .filter(|c| !c.national_number.is_empty())
            .collect();

        // Provider order is display-name ascending; enforce it here so the
        // contract holds even against a sloppy provider.
        contacts.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

        // Dedupe by full digit string, first occurrence wins.
        let mut seen = HashSet::new();
        contacts.retain(|c| seen.insert(c.full_number()));

        contacts.truncate(self.max_results);
        Ok(contacts)
    }
}
