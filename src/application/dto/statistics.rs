//! Point-in-time view of a mapping.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlMapping;

/// Snapshot of a mapping taken when statistics are requested.
///
/// Unlike [`UrlMapping`], the click count here is a plain copy and does not
/// follow later resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlStatistics {
    pub short_code: String,
    pub long_url: String,
    pub click_count: u64,
    pub created_at: DateTime<Utc>,
}

impl From<&UrlMapping> for UrlStatistics {
    fn from(mapping: &UrlMapping) -> Self {
        Self {
            short_code: mapping.short_code().to_owned(),
            long_url: mapping.long_url().to_owned(),
            click_count: mapping.click_count(),
            created_at: mapping.created_at(),
        }
    }
}
