//! Syntactic URL check run before anything is sent to the shortening service.
//!
//! This is a pre-filter only. It does not resolve hosts and it is deliberately
//! permissive: a dotted quad such as `999.999.999.999` is accepted because the
//! octets are not range-checked. Case folding is ASCII-only, so characters
//! like the Kelvin sign never stand in for a letter.

use regex::Regex;
use std::sync::LazyLock;

/// Inline message shown under the input field when the check fails.
pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL";

static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = concat!(
        r"(?i-u)^(https?://)?",
        // domain name
        r"((([a-z0-9]([a-z0-9-]*[a-z0-9])*)\.)+[a-z]{2,}|",
        // OR ipv4-shaped address
        r"(([0-9]{1,3}\.){3}[0-9]{1,3}))",
        // port and path
        r"(:[0-9]+)?(/[-a-z0-9%_.~+]*)*",
        // query string
        r"(\?[;&a-z0-9%_.~+=-]*)?",
        // fragment
        r"(#[-a-z0-9_]*)?$",
    );
    Regex::new(pattern).expect("URL pattern must compile")
});

/// Outcome of [`validate`]. Recomputed on every submit, never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<String>,
}

impl ValidationResult {
    fn accepted() -> Self {
        Self {
            valid: true,
            message: None,
        }
    }

    fn rejected() -> Self {
        Self {
            valid: false,
            message: Some(INVALID_URL_MESSAGE.to_string()),
        }
    }
}

/// Check the shape of `input`.
///
/// Accepts an optional `http`/`https` scheme, a domain name (dot-separated
/// labels ending in an alphabetic label of at least two letters) or a dotted
/// quad, then optional port, path, query and fragment. Matching is
/// case-insensitive and the input is tested as-is, without trimming.
pub fn validate(input: &str) -> ValidationResult {
    if URL_PATTERN.is_match(input) {
        ValidationResult::accepted()
    } else {
        ValidationResult::rejected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_result_has_no_message() {
        let result = validate("example.com");
        assert!(result.valid);
        assert_eq!(result.message, None);
    }

    #[test]
    fn rejected_result_carries_fixed_message() {
        let result = validate("nope");
        assert!(!result.valid);
        assert_eq!(result.message.as_deref(), Some(INVALID_URL_MESSAGE));
    }

    #[test]
    fn case_folding_stays_ascii() {
        assert!(validate("EXAMPLE.COM").valid);
        assert!(!validate("example.co\u{212A}").valid);
        assert!(!validate("\u{017F}ite.com").valid);
    }

    #[test]
    fn octets_are_not_range_checked() {
        assert!(validate("999.999.999.999").valid);
        assert!(validate("http://300.1.1.1:8080/admin").valid);
    }
}
