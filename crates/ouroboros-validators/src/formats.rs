//! Format checks shared by the built-in string validators
//!
//! Patterns are compiled once on first use.

use once_cell::sync::Lazy;
use regex::Regex;

// local@domain.tld, dotted labels allowed on both sides
static EMAIL_ADDRESS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.%+-]+@[A-Za-z0-9-]+(?:\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$").unwrap()
});

// 8-4-4-4-12 hex groups, any version
static UUID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i)[0-9a-f]{8}(?:-[0-9a-f]{4}){3}-[0-9a-f]{12}$").unwrap()
});

static ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\p{L}\p{N}]*$").unwrap());

// any opening or closing tag, `<!DOCTYPE>` included
static MARKUP_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"</?[A-Za-z!][^>]*>").unwrap());

/// Whether `value` looks like an email address
///
/// # Example
/// ```
/// use ouroboros_validators::formats::is_email_address;
///
/// assert!(is_email_address("user@example.com"));
/// assert!(!is_email_address("invalid-email"));
/// ```
pub fn is_email_address(value: &str) -> bool {
    EMAIL_ADDRESS.is_match(value)
}

pub fn is_uuid(value: &str) -> bool {
    UUID.is_match(value)
}

/// Letters and digits only; the empty string passes
pub fn is_alphanumeric(value: &str) -> bool {
    ALPHANUMERIC.is_match(value)
}

/// Whether the text carries markup tags
pub fn contains_markup(value: &str) -> bool {
    MARKUP_TAG.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_addresses() {
        assert!(is_email_address("user@example.com"));
        assert!(is_email_address("a@b.com"));
        assert!(is_email_address("test.user+tag@subdomain.example.co.uk"));

        assert!(!is_email_address("not-an-email"));
        assert!(!is_email_address("@example.com"));
        assert!(!is_email_address("user@"));
        assert!(!is_email_address("user@.com"));
        assert!(!is_email_address("user@example"));
    }

    #[test]
    fn test_uuids() {
        assert!(is_uuid("550e8400-e29b-41d4-a716-446655440000"));
        assert!(is_uuid("550e8400-e29b-11d4-a716-446655440000"));

        assert!(!is_uuid("not-a-uuid"));
        assert!(!is_uuid("550e8400e29b41d4a716446655440000"));
    }

    #[test]
    fn test_alphanumeric() {
        assert!(is_alphanumeric("abc123"));
        assert!(is_alphanumeric("Grüße"));
        assert!(is_alphanumeric(""));
        assert!(!is_alphanumeric("abc 123"));
        assert!(!is_alphanumeric("a-b"));
    }

    #[test]
    fn test_markup() {
        assert!(contains_markup("<b>bold</b>"));
        assert!(contains_markup("hi <script src=x>"));
        assert!(!contains_markup("3 < 4 and 5 > 2"));
        assert!(!contains_markup("plain text"));
    }
}
