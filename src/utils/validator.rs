//! Input validation for long URLs and custom short codes.
//!
//! Both validators are pure and deterministic. The error's `Display` is the
//! human-readable reason shown to the user.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Longest accepted long URL, in characters.
pub const MAX_LONG_URL_LENGTH: usize = 2048;

/// Shortest accepted custom code, in characters.
pub const MIN_CUSTOM_CODE_LENGTH: usize = 3;

/// Longest accepted custom code, in characters.
pub const MAX_CUSTOM_CODE_LENGTH: usize = 30;

/// Letters and digits of any script, plus hyphen.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N}-]+$").unwrap());

/// Reasons a long URL is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Long URL cannot be empty.")]
    Empty,

    #[error("Long URL cannot exceed {MAX_LONG_URL_LENGTH} characters.")]
    TooLong,

    #[error("Long URL must start with http:// or https:// (e.g. https://example.com).")]
    NotAbsolute,

    #[error("Long URL must use http or https scheme.")]
    UnsupportedScheme,
}

/// Reasons a custom short code is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeValidationError {
    #[error("Short code cannot be empty.")]
    Empty,

    #[error(
        "Short code must be between {MIN_CUSTOM_CODE_LENGTH} and {MAX_CUSTOM_CODE_LENGTH} characters."
    )]
    InvalidLength,

    #[error("Short code may only contain letters, digits, and hyphens.")]
    InvalidCharacters,

    #[error("Short code cannot start or end with a hyphen.")]
    HyphenAtEdge,
}

/// Validates a long URL before it is shortened.
///
/// # Rules
///
/// - Must not be blank
/// - At most 2048 characters
/// - Must parse as an absolute URL
/// - Scheme must be `http` or `https`
///
/// # Errors
///
/// Returns the first [`UrlValidationError`] rule that is violated.
///
/// # Examples
///
/// ```
/// use short_link::utils::validator::{validate_long_url, UrlValidationError};
///
/// assert!(validate_long_url("https://example.com/path").is_ok());
/// assert_eq!(validate_long_url("example.com"), Err(UrlValidationError::NotAbsolute));
/// assert_eq!(validate_long_url("ftp://example.com"), Err(UrlValidationError::UnsupportedScheme));
/// ```
pub fn validate_long_url(long_url: &str) -> Result<(), UrlValidationError> {
    if long_url.trim().is_empty() {
        return Err(UrlValidationError::Empty);
    }

    if long_url.chars().count() > MAX_LONG_URL_LENGTH {
        return Err(UrlValidationError::TooLong);
    }

    let url = Url::parse(long_url).map_err(|_| UrlValidationError::NotAbsolute)?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(UrlValidationError::UnsupportedScheme),
    }
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Must not be blank
/// - Length: 3-30 characters
/// - Allowed characters: letters, digits, hyphens
/// - Cannot start or end with a hyphen
///
/// # Errors
///
/// Returns the first [`CodeValidationError`] rule that is violated.
pub fn validate_custom_code(code: &str) -> Result<(), CodeValidationError> {
    if code.trim().is_empty() {
        return Err(CodeValidationError::Empty);
    }

    let length = code.chars().count();
    if !(MIN_CUSTOM_CODE_LENGTH..=MAX_CUSTOM_CODE_LENGTH).contains(&length) {
        return Err(CodeValidationError::InvalidLength);
    }

    if !CUSTOM_CODE_REGEX.is_match(code) {
        return Err(CodeValidationError::InvalidCharacters);
    }

    if code.starts_with('-') || code.ends_with('-') {
        return Err(CodeValidationError::HyphenAtEdge);
    }

    Ok(())
}
