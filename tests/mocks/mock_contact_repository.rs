use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use wasend_mcp_server::error::{AddressBookError, AddressBookResult};
use wasend_mcp_server::models::ContactRecord;
use wasend_mcp_server::repositories::ContactRepository;

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// configured with test data, forced to fail, and queried for how it was
/// called.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactRepository {
    records: Arc<Mutex<Vec<ContactRecord>>>,
    fail_with_timeout: Arc<Mutex<bool>>,
    search_calls: Arc<Mutex<Vec<(String, usize)>>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record to the mock repository.
    pub fn add_record(&self, record: ContactRecord) {
        self.records.lock().unwrap().push(record);
    }

    /// Add multiple records to the mock repository.
    pub fn add_records(&self, records: Vec<ContactRecord>) {
        self.records.lock().unwrap().extend(records);
    }

    /// Make every subsequent search fail with a timeout.
    pub fn fail_with_timeout(&self) {
        *self.fail_with_timeout.lock().unwrap() = true;
    }

    /// The `(filter, limit)` arguments of every search call so far.
    pub fn search_calls(&self) -> Vec<(String, usize)> {
        self.search_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn search(&self, filter: &str, limit: usize) -> AddressBookResult<Vec<ContactRecord>> {
        self.search_calls
            .lock()
            .unwrap()
            .push((filter.to_string(), limit));

        if *self.fail_with_timeout.lock().unwrap() {
            return Err(AddressBookError::Timeout);
        }

        // Filter the way the provider does: substring over name and number,
        // results ordered by display name ascending.
        let filter_lower = filter.to_lowercase();
        let mut matches: Vec<ContactRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| {
                r.display_name
                    .as_ref()
                    .map(|n| n.to_lowercase().contains(&filter_lower))
                    .unwrap_or(false)
                    || r.phone_number.contains(filter)
            })
            .cloned()
            .collect();

        matches.sort_by(|a, b| a.display_name.cmp(&b.display_name));
        matches.truncate(limit);
        Ok(matches)
    }
}
