//! Phone number normalization.
//!
//! Splits a raw phone string into a country calling code and a national
//! number. The split never fails: malformed input degrades to the
//! "no country code detected" branch, and the dispatcher downstream is the
//! enforcement point for anything actually unusable.

use super::country_codes::is_valid_country_code;
use serde::Serialize;

/// The outcome of splitting a raw phone string.
///
/// Invariant: `has_country_code` mirrors `!country_code.is_empty()` by
/// construction, and `country_code + national_number` concatenated equals the
/// whitespace-stripped input with its `+`/`00` prefix removed.
///
/// # Example
///
/// ```
/// use wasend_mcp_server::domain::split;
///
/// let parts = split("+14155551234");
/// assert_eq!(parts.country_code, "1");
/// assert_eq!(parts.national_number, "4155551234");
/// assert!(parts.has_country_code);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneNumberParts {
    /// Detected (or guessed) country calling code; empty when not detected.
    pub country_code: String,

    /// The remainder after the country code, or the whole cleaned input.
    pub national_number: String,

    /// Whether a country code was detected.
    pub has_country_code: bool,
}

impl PhoneNumberParts {
    fn with_code(country_code: String, national_number: String) -> Self {
        let has_country_code = !country_code.is_empty();
        Self {
            country_code,
            national_number,
            has_country_code,
        }
    }

    fn bare(national_number: String) -> Self {
        Self {
            country_code: String::new(),
            national_number,
            has_country_code: false,
        }
    }
}

/// Maximum candidate length tried after a `+` prefix.
const MAX_PLUS_CANDIDATE: usize = 4;

/// Maximum candidate length tried after a `00` trunk prefix.
const MAX_TRUNK_CANDIDATE: usize = 3;

/// Length of the fallback guess when no table entry matches.
const FALLBACK_GUESS: usize = 2;

/// Split a raw phone string into country code and national number.
///
/// Recognizes an explicit international prefix (`+` or `00`) and searches the
/// country code table with candidate lengths in ascending order - the first
/// (shortest) table match wins, not the longest prefix. When the prefix is
/// present but no candidate matches the table, the first two characters are
/// taken as a best-effort guess. Without a recognized prefix the cleaned
/// input is returned whole as the national number.
pub fn split(raw: &str) -> PhoneNumberParts {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    if let Some(rest) = cleaned.strip_prefix('+') {
        split_after_prefix(rest, MAX_PLUS_CANDIDATE)
    } else if let Some(rest) = cleaned.strip_prefix("00") {
        split_after_prefix(rest, MAX_TRUNK_CANDIDATE)
    } else {
        PhoneNumberParts::bare(cleaned)
    }
}

/// Search for a table-listed country code at the start of `rest`.
///
/// Candidate lengths run from 1 to `min(max_candidate, len - 1)` so at least
/// one character is left for the national number. All bounds are clamped, so
/// an input that is nothing but a prefix degrades to empty parts.
fn split_after_prefix(rest: &str, max_candidate: usize) -> PhoneNumberParts {
    let chars: Vec<char> = rest.chars().collect();
    let limit = max_candidate.min(chars.len().saturating_sub(1));

    for len in 1..=limit {
        let candidate: String = chars[..len].iter().collect();
        if is_valid_country_code(&candidate) {
            return PhoneNumberParts::with_code(candidate, chars[len..].iter().collect());
        }
    }

    // No table match: guess the first two characters, clamped so the
    // national number keeps at least one character.
    let guess = FALLBACK_GUESS.min(chars.len().saturating_sub(1));
    PhoneNumberParts::with_code(
        chars[..guess].iter().collect(),
        chars[guess..].iter().collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plus_prefix_shortest_match_wins() {
        // "1" matches before "14" or "141" would even be tried.
        let parts = split("+14155551234");
        assert_eq!(parts.country_code, "1");
        assert_eq!(parts.national_number, "4155551234");
        assert!(parts.has_country_code);
    }

    #[test]
    fn test_plus_prefix_two_digit_code() {
        let parts = split("+919876543210");
        assert_eq!(parts.country_code, "91");
        assert_eq!(parts.national_number, "9876543210");
    }

    #[test]
    fn test_plus_prefix_three_digit_code() {
        let parts = split("+85212345678");
        assert_eq!(parts.country_code, "852");
        assert_eq!(parts.national_number, "12345678");
    }

    #[test]
    fn test_trunk_prefix() {
        let parts = split("00447911123456");
        assert_eq!(parts.country_code, "44");
        assert_eq!(parts.national_number, "7911123456");
        assert!(parts.has_country_code);
    }

    #[test]
    fn test_no_prefix_passthrough() {
        let parts = split("9876543210");
        assert_eq!(parts.country_code, "");
        assert_eq!(parts.national_number, "9876543210");
        assert!(!parts.has_country_code);
    }

    #[test]
    fn test_whitespace_stripped() {
        let parts = split(" +91 98765 43210 ");
        assert_eq!(parts.country_code, "91");
        assert_eq!(parts.national_number, "9876543210");

        let parts = split("98 76 54 32 10");
        assert_eq!(parts.national_number, "9876543210");
    }

    #[test]
    fn test_fallback_guess_on_unknown_code() {
        // "9", "99", "999", "9999" are all absent from the table.
        let parts = split("+9991234567");
        assert_eq!(parts.country_code, "99");
        assert_eq!(parts.national_number, "91234567");
        assert!(parts.has_country_code);
    }

    #[test]
    fn test_prefix_only_degrades() {
        let parts = split("+");
        assert_eq!(parts.country_code, "");
        assert_eq!(parts.national_number, "");
        assert!(!parts.has_country_code);

        let parts = split("00");
        assert_eq!(parts.country_code, "");
        assert_eq!(parts.national_number, "");
    }

    #[test]
    fn test_short_inputs_never_panic() {
        // One character after the prefix: nothing can be consumed as a code.
        let parts = split("+1");
        assert_eq!(parts.country_code, "");
        assert_eq!(parts.national_number, "1");

        let parts = split("005");
        assert_eq!(parts.country_code, "");
        assert_eq!(parts.national_number, "5");
    }

    #[test]
    fn test_concatenation_invariant() {
        for input in ["+919876543210", "00447911123456", "+9991234567"] {
            let parts = split(input);
            let stripped = input
                .strip_prefix('+')
                .or_else(|| input.strip_prefix("00"))
                .unwrap();
            assert_eq!(
                format!("{}{}", parts.country_code, parts.national_number),
                stripped
            );
        }
    }

    #[test]
    fn test_split_idempotent_over_own_output() {
        let first = split("+919876543210");
        let rejoined = format!("+{}{}", first.country_code, first.national_number);
        assert_eq!(split(&rejoined), first);
    }

    #[test]
    fn test_non_digit_input_degrades() {
        let parts = split("+abcdef");
        assert_eq!(parts.country_code, "ab");
        assert_eq!(parts.national_number, "cdef");

        let parts = split("hello");
        assert!(!parts.has_country_code);
        assert_eq!(parts.national_number, "hello");
    }
}
