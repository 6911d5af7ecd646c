//! Application layer services implementing business logic.
//!
//! This layer orchestrates domain operations by coordinating repository calls,
//! validation, and code generation. Services consume the domain traits and
//! provide a clean API for front ends.
//!
//! - [`services::url_service::UrlService`] - Short URL creation, resolution and statistics
//! - [`dto`] - Snapshot types returned to callers

pub mod dto;
pub mod services;
