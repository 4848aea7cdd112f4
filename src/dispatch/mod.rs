//! Message dispatch: validation, URI construction, and platform hand-off.
//!
//! `prepare_target` is the pure half of the dispatcher - it validates the
//! recipient and produces a [`DispatchTarget`] without touching the platform.
//! Routing between the native deep link and the web fallback, and the actual
//! launch, live in [`uri`] and [`launcher`].

pub mod launcher;
pub mod uri;

pub use launcher::{DesktopEntryProbe, PackageProbe, SystemLauncher, UriLauncher, WHATSAPP_PACKAGES};
pub use uri::WhatsAppUri;

use crate::domain::ValidationError;

/// A validated dispatch request: the full dialable number plus the untouched
/// message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchTarget {
    /// Country code and national number concatenated, no `+`
    pub full_number: String,

    /// Message text exactly as the user composed it
    pub message: String,
}

/// Validate a recipient and message into a [`DispatchTarget`].
///
/// Validation short-circuits, first failure wins:
/// 1. an empty (after whitespace-strip) national number fails with
///    [`ValidationError::EmptyPhoneNumber`];
/// 2. a combined number shorter than `min_digits` fails with
///    [`ValidationError::IncompleteNumber`].
///
/// A national number that itself carries a leading `+` is taken as already
/// fully qualified: the `+` is dropped and the separate country code is
/// ignored.
pub fn prepare_target(
    country_code: &str,
    national_number: &str,
    message: &str,
    min_digits: usize,
) -> Result<DispatchTarget, ValidationError> {
    let national: String = national_number
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if national.is_empty() {
        return Err(ValidationError::EmptyPhoneNumber);
    }

    let full_number = match national.strip_prefix('+') {
        Some(qualified) => qualified.to_string(),
        None => {
            let code: String = country_code
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            format!("{}{}", code, national)
        }
    };

    if full_number.len() < min_digits {
        return Err(ValidationError::IncompleteNumber {
            digits: full_number.len(),
            required: min_digits,
        });
    }

    Ok(DispatchTarget {
        full_number,
        message: message.to_string(),
    })
}
