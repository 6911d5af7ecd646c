//! Shared application state wiring the service to its concrete store.

use std::sync::Arc;

use crate::application::services::UrlService;
use crate::config::Config;
use crate::infrastructure::persistence::InMemoryUrlRepository;
use crate::utils::code_generator::{Base62Generator, CodeLengthError};

/// Service type used by the binary: in-memory store, OS-random codes.
pub type InMemoryUrlService = UrlService<InMemoryUrlRepository, Base62Generator>;

#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<InMemoryUrlService>,
}

impl AppState {
    /// Builds a fresh, empty state from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CodeLengthError`] if `config.code_length` is outside `1..=30`.
    pub fn new(config: &Config) -> Result<Self, CodeLengthError> {
        let url_service = UrlService::new(
            Arc::new(InMemoryUrlRepository::new()),
            Arc::new(Base62Generator::new()),
        )
        .with_code_length(config.code_length)?;

        Ok(Self {
            url_service: Arc::new(url_service),
        })
    }
}
