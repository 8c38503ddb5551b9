//! Local validation of login input.
//!
//! Both rules are fixed policies: an email shape check with no DNS lookup,
//! and a narrow password length window that is not a strength check.

use crate::types::{Credentials, ValidationState};
use regex::Regex;
use std::sync::OnceLock;

/// Shortest accepted password, in UTF-16 code units
///
/// Characters outside the Basic Multilingual Plane, such as most emoji,
/// count as two.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Longest accepted password, in UTF-16 code units
pub const MAX_PASSWORD_LEN: usize = 10;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@([A-Za-z0-9.-]+\.[A-Za-z]{2,})$";

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

/// Check an email address against the accepted shape.
///
/// Absent input is invalid, not an error.
pub fn validate_email(email: Option<&str>) -> bool {
    email.is_some_and(is_valid_email)
}

/// Check a present email address against the accepted shape.
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email_regex().is_some_and(|re| re.is_match(email))
}

/// Check a password's length against the accepted window.
///
/// Absent input is invalid, not an error.
pub fn validate_password(password: Option<&str>) -> bool {
    password.is_some_and(is_valid_password)
}

/// Check a present password's length against the accepted window.
pub fn is_valid_password(password: &str) -> bool {
    (MIN_PASSWORD_LEN..=MAX_PASSWORD_LEN).contains(&password.encode_utf16().count())
}

/// Validate both fields of a login attempt.
pub fn validate(credentials: &Credentials) -> ValidationState {
    ValidationState {
        email_invalid: !is_valid_email(&credentials.email),
        password_invalid: !is_valid_password(&credentials.password),
    }
}
