use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$").expect("email pattern must compile")
});

/// Validates that the input looks like an email address.
///
/// The pattern is deliberately loose: no TLD is required and no trimming or
/// case folding happens, so `" a@b"` is rejected while `"a@b"` is accepted.
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_PATTERN.is_match(email)
}

/// A full name only has to be present.
pub fn is_valid_full_name(full_name: &str) -> bool {
    !full_name.trim().is_empty()
}
