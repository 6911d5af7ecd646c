//! Short code generator abstraction.

/// Produces candidate short codes.
///
/// Implementations are pure generators that never look at storage; the
/// service checks candidates against the repository and retries on collision.
#[cfg_attr(test, mockall::automock)]
pub trait ShortCodeGenerator: Send + Sync {
    /// Returns a new candidate code of exactly `length` characters.
    ///
    /// # Panics
    ///
    /// Implementations may panic when `length` is outside the range they
    /// support. Callers are expected to validate the length up front.
    fn generate(&self, length: usize) -> String;
}
