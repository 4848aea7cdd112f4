//! Contact model for address-book lookup results.

use crate::domain;
use serde::{Deserialize, Serialize};

/// Display name used when the provider has no name for an entry.
pub const UNNAMED_CONTACT: &str = "Unknown";

/// A raw address-book entry as returned by the provider.
///
/// The provider contract is a minimal `(id, name, number)` tuple; everything
/// derived (normalized number parts, placeholder names) happens when the
/// record is promoted to a [`Contact`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct ContactRecord {
    /// Opaque identifier assigned by the provider
    pub id: String,

    /// Display name, may be absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Phone number as stored, formatting included
    pub phone_number: String,
}

/// An address-book contact with its number already normalized.
///
/// Created transiently per lookup and discarded with the result set; nothing
/// is cached across queries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Opaque identifier from the provider
    pub id: String,

    /// Display name, `"Unknown"` when the provider has none
    pub name: String,

    /// Phone number with whitespace stripped
    pub phone_number: String,

    /// Country code derived via the normalizer; empty when not detected
    pub country_code: String,

    /// National number derived via the normalizer
    pub national_number: String,
}

impl Contact {
    /// Promote a provider record to a contact, normalizing its number.
    pub fn from_record(record: ContactRecord) -> Self {
        let phone_number: String = record
            .phone_number
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let parts = domain::split(&phone_number);

        let name = match record.display_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => UNNAMED_CONTACT.to_string(),
        };

        Self {
            id: record.id,
            name,
            phone_number,
            country_code: parts.country_code,
            national_number: parts.national_number,
        }
    }

    /// Country code and national number joined back into one digit string.
    ///
    /// Used as the deduplication key for lookup results.
    pub fn full_number(&self) -> String {
        format!("{}{}", self.country_code, self.national_number)
    }
}
