//! Strength policy for retailer-chosen passwords.
//!
//! Applies only to the change-password path; generated credentials are hex
//! tokens and never pass through here.

/// Message returned to callers whose new password fails the policy.
pub const POLICY_MESSAGE: &str =
    "Password must be at least 8 characters and include uppercase, lowercase, number, and special character";

const MIN_LENGTH: usize = 8;

/// Minimum length plus one of each: lowercase, uppercase, digit, symbol.
#[must_use]
pub fn meets_policy(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_all_classes() {
        assert!(meets_policy("Valid1Pass!"));
        assert!(meets_policy("aB3$efgh"));
    }

    #[test]
    fn test_rejects_too_short() {
        assert!(!meets_policy("short1!"));
        // still seven characters with all four classes present
        assert!(!meets_policy("Short1!"));
    }

    #[test]
    fn test_rejects_missing_class() {
        assert!(!meets_policy("alllowercase1!"));
        assert!(!meets_policy("ALLUPPERCASE1!"));
        assert!(!meets_policy("NoDigitsHere!"));
        assert!(!meets_policy("NoSymbols123"));
    }
}
