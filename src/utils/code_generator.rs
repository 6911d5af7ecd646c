//! Short code generation utilities.
//!
//! Provides cryptographically secure random base62 code generation.

use crate::domain::ShortCodeGenerator;

/// Characters a generated code is drawn from, in index order.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of generated codes unless configured otherwise.
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// Shortest code the generator will produce.
pub const MIN_CODE_LENGTH: usize = 1;

/// Longest code the generator will produce.
pub const MAX_CODE_LENGTH: usize = 30;

/// Requested code length is outside `MIN_CODE_LENGTH..=MAX_CODE_LENGTH`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Length must be between {MIN_CODE_LENGTH} and {MAX_CODE_LENGTH}, got {0}")]
pub struct CodeLengthError(pub usize);

/// Checks that `length` is a length the generator supports.
///
/// # Errors
///
/// Returns [`CodeLengthError`] if `length` is outside `1..=30`.
pub fn check_code_length(length: usize) -> Result<usize, CodeLengthError> {
    if (MIN_CODE_LENGTH..=MAX_CODE_LENGTH).contains(&length) {
        Ok(length)
    } else {
        Err(CodeLengthError(length))
    }
}

/// Generates a random base62 code of `length` characters.
///
/// Reads one byte from the OS random source per output character and maps it
/// onto [`ALPHABET`] with `byte % 62`.
///
/// # Errors
///
/// Returns [`CodeLengthError`] if `length` is outside `1..=30`.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn try_generate_code(length: usize) -> Result<String, CodeLengthError> {
    let length = check_code_length(length)?;

    let mut buffer = [0u8; MAX_CODE_LENGTH];
    let bytes = &mut buffer[..length];

    getrandom::fill(bytes).expect("Failed to generate random bytes");

    Ok(bytes
        .iter()
        .map(|b| ALPHABET[usize::from(*b) % ALPHABET.len()] as char)
        .collect())
}

/// Generates a random base62 code of `length` characters.
///
/// # Panics
///
/// Panics if `length` is outside `1..=30`. An out-of-range length is a caller
/// bug, not a recoverable condition; use [`try_generate_code`] to check first.
///
/// # Examples
///
/// ```
/// use short_link::utils::code_generator::generate_code;
///
/// let code = generate_code(7);
/// assert_eq!(code.len(), 7);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code(length: usize) -> String {
    match try_generate_code(length) {
        Ok(code) => code,
        Err(e) => panic!("{e}"),
    }
}

/// Production [`ShortCodeGenerator`] backed by [`generate_code`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Base62Generator;

impl Base62Generator {
    pub fn new() -> Self {
        Self
    }
}

impl ShortCodeGenerator for Base62Generator {
    fn generate(&self, length: usize) -> String {
        generate_code(length)
    }
}
