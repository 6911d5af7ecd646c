//! Repository trait for short code to URL mappings.

use std::sync::Arc;

use crate::domain::entities::UrlMapping;

/// Concurrent store of [`UrlMapping`] records keyed by short code.
///
/// All methods must be safe to call from many threads at once without
/// external locking. Records are handed out as shared `Arc` handles, so a
/// click recorded through one handle is visible through every other.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - `DashMap` backed store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait UrlRepository: Send + Sync {
    /// Inserts the mapping iff no record exists under its short code.
    ///
    /// Returns `true` if the insert happened. Never overwrites. Among
    /// concurrent calls for the same code exactly one returns `true`.
    fn add(&self, mapping: Arc<UrlMapping>) -> bool;

    /// Removes the record under `short_code`.
    ///
    /// Returns `true` if a record was present and removed.
    fn delete(&self, short_code: &str) -> bool;

    /// Returns the live record for `short_code`, if any.
    fn get_by_short_code(&self, short_code: &str) -> Option<Arc<UrlMapping>>;

    /// Returns whether a record exists under `short_code`.
    fn exists(&self, short_code: &str) -> bool;

    /// Returns every record present at call time.
    ///
    /// Later inserts and deletes do not change the returned vector.
    fn get_all(&self) -> Vec<Arc<UrlMapping>>;

    /// Number of live records.
    fn count(&self) -> usize;
}
