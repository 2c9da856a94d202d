//! Input shape checks shared by the flows.

use regex::Regex;

/// Lightweight email sanity check applied before any flow work.
#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// Phone numbers are digits only, at least ten of them.
#[must_use]
pub fn valid_phone(phone: &str) -> bool {
    Regex::new(r"^[0-9]{10,}$").is_ok_and(|re| re.is_match(phone))
}

/// Absent-or-whitespace check; blank input never overwrites stored state.
#[must_use]
pub fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(valid_email("alice@x.com"));
        assert!(valid_email("first.last@sub.example.co"));
        assert!(!valid_email("alice@x"));
        assert!(!valid_email("alice @x.com"));
        assert!(!valid_email("@x.com"));
        assert!(!valid_email(""));
    }

    #[test]
    fn test_valid_phone() {
        assert!(valid_phone("0123456789"));
        assert!(valid_phone("441234567890"));
        assert!(!valid_phone("123456789"));
        assert!(!valid_phone("01234-5678"));
        assert!(!valid_phone("+1234567890"));
    }

    #[test]
    fn test_blank() {
        assert!(blank(""));
        assert!(blank("   \t"));
        assert!(!blank(" x "));
    }
}
