//! Mapping entity associating a short code with a long URL.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};

/// A short code to long URL mapping with its click counter.
///
/// `short_code`, `long_url` and `created_at` never change after construction.
/// The click counter is atomic, so a single record can be shared between
/// threads behind an `Arc` and resolved concurrently without losing clicks.
#[derive(Debug)]
pub struct UrlMapping {
    short_code: String,
    long_url: String,
    created_at: DateTime<Utc>,
    click_count: AtomicU64,
}

impl UrlMapping {
    /// Creates a new mapping stamped with the current UTC time and zero clicks.
    pub fn new(short_code: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self::with_created_at(short_code, long_url, Utc::now())
    }

    /// Creates a new mapping with an explicit creation time.
    pub fn with_created_at(
        short_code: impl Into<String>,
        long_url: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            short_code: short_code.into(),
            long_url: long_url.into(),
            created_at,
            click_count: AtomicU64::new(0),
        }
    }

    pub fn short_code(&self) -> &str {
        &self.short_code
    }

    pub fn long_url(&self) -> &str {
        &self.long_url
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Current number of recorded clicks.
    pub fn click_count(&self) -> u64 {
        self.click_count.load(Ordering::Acquire)
    }

    /// Atomically records one click and returns the new total.
    pub fn increment_click(&self) -> u64 {
        self.click_count.fetch_add(1, Ordering::AcqRel) + 1
    }
}
