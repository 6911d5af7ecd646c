//! # Short Link
//!
//! An in-memory URL shortener: maps long URLs to short unique codes, resolves
//! codes back while counting clicks, and supports deletion and statistics.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Mapping entity, repository and generator traits
//! - **Application Layer** ([`application`]) - Shortening service and snapshots
//! - **Infrastructure Layer** ([`infrastructure`]) - Concurrent in-memory store
//! - **Console** ([`console`]) - Text rendering for the interactive binary
//!
//! ## Guarantees
//!
//! - A short code is owned by at most one mapping; concurrent inserts of the
//!   same code have exactly one winner
//! - Click counts are atomic: N resolves always yield exactly N clicks
//! - Nothing is persisted; process exit drops every mapping
//!
//! ## Quick Start
//!
//! ```
//! use short_link::prelude::*;
//! use std::sync::Arc;
//!
//! let service = UrlService::new(
//!     Arc::new(InMemoryUrlRepository::new()),
//!     Arc::new(Base62Generator::new()),
//! );
//!
//! let mapping = service
//!     .create_short_url("https://example.com", Some("mycode"))
//!     .unwrap();
//! assert_eq!(mapping.short_code(), "mycode");
//!
//! assert_eq!(service.resolve_short_url("mycode").unwrap(), "https://example.com");
//! assert_eq!(service.get_statistics("mycode").unwrap().click_count, 1);
//! ```
//!
//! ## Configuration
//!
//! The binary is configured from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod console;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub use error::{ErrorKind, ServiceError};
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::dto::UrlStatistics;
    pub use crate::application::services::{MAX_GENERATION_ATTEMPTS, UrlService};
    pub use crate::domain::ShortCodeGenerator;
    pub use crate::domain::entities::UrlMapping;
    pub use crate::domain::repositories::UrlRepository;
    pub use crate::error::{ErrorKind, ServiceError};
    pub use crate::infrastructure::persistence::InMemoryUrlRepository;
    pub use crate::state::AppState;
    pub use crate::utils::code_generator::Base62Generator;
}
