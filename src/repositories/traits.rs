use crate::error::AddressBookResult;
use crate::models::ContactRecord;
use async_trait::async_trait;

/// Repository over the address-book provider.
///
/// Provides abstraction over where contact records come from, enabling
/// different implementations (HTTP provider, mock).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Search records with a free-text filter over display name and number.
    ///
    /// Implementations return results ordered by display name ascending and
    /// respect `limit` as an upper bound on the record count.
    async fn search(&self, filter: &str, limit: usize) -> AddressBookResult<Vec<ContactRecord>>;
}
