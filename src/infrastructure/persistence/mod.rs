//! Storage implementations of the domain repository traits.
//!
//! - [`InMemoryUrlRepository`] - Volatile `DashMap` backed mapping store

pub mod in_memory_url_repository;

pub use in_memory_url_repository::InMemoryUrlRepository;
