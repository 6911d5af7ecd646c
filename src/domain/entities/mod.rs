//! Core domain entities representing the business data model.
//!
//! - [`UrlMapping`] - A short code to long URL mapping with its click counter

pub mod url_mapping;

pub use url_mapping::UrlMapping;
