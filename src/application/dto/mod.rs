//! Data transfer objects returned by application services.

pub mod statistics;

pub use statistics::UrlStatistics;
