//! Domain layer containing business entities and contracts.
//!
//! This module defines entities and the interfaces the application layer
//! depends on, independent of how they are implemented.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`generator`] - Short code generator trait
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented by the infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod entities;
pub mod generator;
pub mod repositories;

pub use generator::ShortCodeGenerator;

#[cfg(test)]
pub use generator::MockShortCodeGenerator;
