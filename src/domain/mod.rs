//! Domain value objects and types.
//!
//! This module contains the phone number normalizer, the country calling
//! code table it matches against, and the validation errors the dispatcher
//! reports. The normalizer is a total function: invalid input degrades to
//! the "no country code detected" branch rather than erroring.

pub mod country_codes;
pub mod errors;
pub mod phone;

pub use country_codes::is_valid_country_code;
pub use errors::ValidationError;
pub use phone::{split, PhoneNumberParts};
