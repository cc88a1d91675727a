//! Field rules for customer records.
//!
//! Each check returns the matching [`RolodexError`] variant so callers can report
//! the exact problem. Values are checked as given; trimming is the caller's business.

use crate::error::{Result, RolodexError};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid"));

pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(RolodexError::EmptyName);
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<()> {
    if !EMAIL_RE.is_match(email) {
        return Err(RolodexError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// Only ASCII digits are allowed. An empty phone has no offending character and passes.
pub fn validate_phone(phone: &str) -> Result<()> {
    if phone.chars().any(|c| !c.is_ascii_digit()) {
        return Err(RolodexError::InvalidPhone(phone.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_names() {
        assert!(matches!(validate_name(""), Err(RolodexError::EmptyName)));
        assert!(matches!(validate_name("   \t"), Err(RolodexError::EmptyName)));
        assert!(validate_name("Alice").is_ok());
    }

    #[test]
    fn accepts_simple_emails() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("first.last@mail.example.org").is_ok());
    }

    #[test]
    fn rejects_malformed_emails() {
        for bad in ["not-an-email", "a@b", "@b.com", "a@.com", "a b@c.com", "a@@b.com", ""] {
            assert!(
                matches!(validate_email(bad), Err(RolodexError::InvalidEmail(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }

    #[test]
    fn phone_must_be_digits() {
        assert!(validate_phone("0123456789").is_ok());
        assert!(validate_phone("").is_ok());
        for bad in ["123-456", "+49123", "12 34", "12a", "١٢٣"] {
            assert!(
                matches!(validate_phone(bad), Err(RolodexError::InvalidPhone(_))),
                "expected {bad:?} to be rejected"
            );
        }
    }
}
