//! Domain validation errors.

use std::fmt;

/// Errors that can occur while validating a dispatch request.
///
/// Both variants are user-facing and recoverable: the caller surfaces them as
/// a transient notice and takes no further action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// No national number was provided.
    EmptyPhoneNumber,

    /// The combined number has fewer digits than the configured minimum.
    IncompleteNumber {
        /// Digits actually present.
        digits: usize,
        /// Minimum digits required.
        required: usize,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPhoneNumber => write!(f, "Please enter a phone number"),
            Self::IncompleteNumber { digits, required } => write!(
                f,
                "Incomplete phone number: {} digits, at least {} required (include the country code)",
                digits, required
            ),
        }
    }
}

impl std::error::Error for ValidationError {}
