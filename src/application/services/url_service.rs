//! Short URL creation, resolution and statistics service.

use std::sync::Arc;

use crate::application::dto::UrlStatistics;
use crate::domain::ShortCodeGenerator;
use crate::domain::entities::UrlMapping;
use crate::domain::repositories::UrlRepository;
use crate::error::ServiceError;
use crate::utils::code_generator::{CodeLengthError, DEFAULT_CODE_LENGTH, check_code_length};
use crate::utils::validator::{validate_custom_code, validate_long_url};
use serde_json::json;

/// Generated codes tried before giving up on finding a free one.
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service for creating, resolving and inspecting short URLs.
///
/// Validates input, allocates codes (custom or generated with collision
/// retry) and delegates storage to a [`UrlRepository`]. The service is
/// `Send + Sync` and safe to share between threads behind an `Arc`.
pub struct UrlService<R: UrlRepository, G: ShortCodeGenerator> {
    repository: Arc<R>,
    generator: Arc<G>,
    code_length: usize,
}

impl<R: UrlRepository, G: ShortCodeGenerator> UrlService<R, G> {
    /// Creates a new service generating codes of the default length (7).
    pub fn new(repository: Arc<R>, generator: Arc<G>) -> Self {
        Self {
            repository,
            generator,
            code_length: DEFAULT_CODE_LENGTH,
        }
    }

    /// Sets the length of generated codes.
    ///
    /// # Errors
    ///
    /// Returns [`CodeLengthError`] if `code_length` is outside `1..=30`.
    pub fn with_code_length(mut self, code_length: usize) -> Result<Self, CodeLengthError> {
        self.code_length = check_code_length(code_length)?;
        Ok(self)
    }

    /// Length of generated codes.
    pub fn code_length(&self) -> usize {
        self.code_length
    }

    /// Creates a short URL, using `custom_code` if one is given.
    ///
    /// A `custom_code` that is `None`, empty or whitespace-only means "no
    /// custom code" and a code is generated instead.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::InvalidUrl`] if `long_url` fails validation
    /// - [`ServiceError::InvalidShortCode`] if `custom_code` fails validation
    /// - [`ServiceError::GenerationFailed`] if every generated candidate collided
    /// - [`ServiceError::DuplicateShortCode`] if the code is already taken
    pub fn create_short_url(
        &self,
        long_url: &str,
        custom_code: Option<&str>,
    ) -> Result<Arc<UrlMapping>, ServiceError> {
        validate_long_url(long_url).map_err(|e| {
            ServiceError::invalid_url(e.to_string(), json!({ "long_url": long_url }))
        })?;

        let short_code = match custom_code.filter(|c| !c.trim().is_empty()) {
            Some(custom) => {
                validate_custom_code(custom).map_err(|e| {
                    ServiceError::invalid_short_code(e.to_string(), json!({ "code": custom }))
                })?;
                custom.to_owned()
            }
            None => self.generate_unique_code().ok_or_else(|| {
                ServiceError::generation_failed(
                    "Failed to generate a unique short code after multiple attempts.",
                    json!({ "attempts": MAX_GENERATION_ATTEMPTS }),
                )
            })?,
        };

        let mapping = Arc::new(UrlMapping::new(short_code, long_url));

        if !self.repository.add(Arc::clone(&mapping)) {
            tracing::warn!(code = %mapping.short_code(), "Short code already in use");
            return Err(ServiceError::duplicate_short_code(
                format!("Short code '{}' is already in use.", mapping.short_code()),
                json!({ "code": mapping.short_code() }),
            ));
        }

        tracing::debug!(code = %mapping.short_code(), long_url, "Short URL created");
        Ok(mapping)
    }

    /// Deletes the mapping for `short_code`.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::InvalidShortCode`] if `short_code` is blank
    /// - [`ServiceError::NotFound`] if no mapping exists
    pub fn delete_short_url(&self, short_code: &str) -> Result<bool, ServiceError> {
        ensure_not_blank(short_code)?;

        if !self.repository.delete(short_code) {
            return Err(not_found(short_code));
        }

        tracing::debug!(code = %short_code, "Short URL deleted");
        Ok(true)
    }

    /// Returns the long URL for `short_code` and records one click.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::InvalidShortCode`] if `short_code` is blank
    /// - [`ServiceError::NotFound`] if no mapping exists
    pub fn resolve_short_url(&self, short_code: &str) -> Result<String, ServiceError> {
        let mapping = self.find(short_code)?;
        let clicks = mapping.increment_click();

        tracing::debug!(code = %short_code, clicks, "Short URL resolved");
        Ok(mapping.long_url().to_owned())
    }

    /// Returns a snapshot of the mapping for `short_code`.
    ///
    /// Does not count as a click.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::InvalidShortCode`] if `short_code` is blank
    /// - [`ServiceError::NotFound`] if no mapping exists
    pub fn get_statistics(&self, short_code: &str) -> Result<UrlStatistics, ServiceError> {
        let mapping = self.find(short_code)?;
        Ok(UrlStatistics::from(mapping.as_ref()))
    }

    /// Returns every mapping present at call time.
    pub fn list_all(&self) -> Vec<Arc<UrlMapping>> {
        self.repository.get_all()
    }

    /// Returns snapshots of every mapping, oldest first.
    ///
    /// Mappings created in the same instant are ordered by code.
    pub fn list_statistics(&self) -> Vec<UrlStatistics> {
        let mut stats: Vec<UrlStatistics> = self
            .list_all()
            .iter()
            .map(|m| UrlStatistics::from(m.as_ref()))
            .collect();

        stats.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.short_code.cmp(&b.short_code))
        });
        stats
    }

    /// Number of live mappings.
    pub fn count(&self) -> usize {
        self.repository.count()
    }

    fn find(&self, short_code: &str) -> Result<Arc<UrlMapping>, ServiceError> {
        ensure_not_blank(short_code)?;

        self.repository
            .get_by_short_code(short_code)
            .ok_or_else(|| not_found(short_code))
    }

    /// Generates a code not currently in the repository.
    ///
    /// Attempts up to [`MAX_GENERATION_ATTEMPTS`] times. The existence check
    /// only makes success likely; uniqueness is enforced by `add`.
    fn generate_unique_code(&self) -> Option<String> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let code = self.generator.generate(self.code_length);

            if !self.repository.exists(&code) {
                return Some(code);
            }

            tracing::warn!(code = %code, attempt, "Generated short code collided");
        }

        tracing::warn!(
            attempts = MAX_GENERATION_ATTEMPTS,
            "Gave up generating a unique short code"
        );
        None
    }
}

fn ensure_not_blank(short_code: &str) -> Result<(), ServiceError> {
    if short_code.trim().is_empty() {
        return Err(ServiceError::invalid_short_code(
            "Short code cannot be empty.",
            json!({ "code": short_code }),
        ));
    }
    Ok(())
}

fn not_found(short_code: &str) -> ServiceError {
    ServiceError::not_found(
        format!("Short code '{short_code}' was not found."),
        json!({ "code": short_code }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MockShortCodeGenerator;
    use crate::domain::repositories::MockUrlRepository;
    use crate::error::ErrorKind;
    use crate::infrastructure::persistence::InMemoryUrlRepository;
    use crate::utils::code_generator::{ALPHABET, Base62Generator};
    use mockall::Sequence;
    use mockall::predicate::eq;

    fn service() -> UrlService<InMemoryUrlRepository, Base62Generator> {
        UrlService::new(
            Arc::new(InMemoryUrlRepository::new()),
            Arc::new(Base62Generator::new()),
        )
    }

    fn service_with_generator(
        repository: Arc<InMemoryUrlRepository>,
        generator: MockShortCodeGenerator,
    ) -> UrlService<InMemoryUrlRepository, MockShortCodeGenerator> {
        UrlService::new(repository, Arc::new(generator))
    }

    #[test]
    fn test_create_auto_generated_code() {
        let service = service();

        let mapping = service
            .create_short_url("https://example.com", None)
            .unwrap();

        assert_eq!(mapping.short_code().len(), 7);
        assert!(mapping.short_code().bytes().all(|b| ALPHABET.contains(&b)));
        assert_eq!(mapping.long_url(), "https://example.com");
        assert_eq!(mapping.click_count(), 0);
        assert_eq!(service.count(), 1);
    }

    #[test]
    fn test_create_with_custom_code() {
        let service = service();

        let mapping = service
            .create_short_url("https://example.com", Some("mycode"))
            .unwrap();

        assert_eq!(mapping.short_code(), "mycode");
        assert_eq!(mapping.click_count(), 0);
    }

    #[test]
    fn test_create_with_custom_code_containing_hyphens() {
        let service = service();

        let mapping = service
            .create_short_url("https://example.com", Some("my-cool-link"))
            .unwrap();

        assert_eq!(mapping.short_code(), "my-cool-link");
    }

    #[test]
    fn test_blank_custom_code_falls_back_to_generation() {
        let service = service();

        for blank in ["", "   ", "\t"] {
            let mapping = service
                .create_short_url("https://example.com", Some(blank))
                .unwrap();
            assert_eq!(mapping.short_code().len(), 7);
        }
        assert_eq!(service.count(), 3);
    }

    #[test]
    fn test_create_uses_configured_code_length() {
        let service = service().with_code_length(12).unwrap();

        let mapping = service
            .create_short_url("https://example.com", None)
            .unwrap();

        assert_eq!(service.code_length(), 12);
        assert_eq!(mapping.short_code().len(), 12);
    }

    #[test]
    fn test_with_code_length_rejects_out_of_range() {
        assert!(service().with_code_length(0).is_err());
        assert!(service().with_code_length(31).is_err());
        assert!(service().with_code_length(30).is_ok());
    }

    #[test]
    fn test_create_invalid_url_does_not_touch_repository() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_add().times(0);
        mock_repo.expect_exists().times(0);

        let mut mock_generator = MockShortCodeGenerator::new();
        mock_generator.expect_generate().times(0);

        let service = UrlService::new(Arc::new(mock_repo), Arc::new(mock_generator));

        for url in ["", "   ", "not-a-url", "ftp://example.com", "example.com/path"] {
            let err = service.create_short_url(url, None).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidUrl, "url: {url:?}");
        }
    }

    #[test]
    fn test_create_url_exceeding_max_length() {
        let service = service();
        let long_url = format!("https://example.com/{}", "a".repeat(2048));

        let err = service.create_short_url(&long_url, None).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidUrl);
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_create_invalid_custom_code() {
        let service = service();

        for code in ["ab", "a", "co de", "co!de", "-mycode", "mycode-"] {
            let err = service
                .create_short_url("https://example.com", Some(code))
                .unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidShortCode, "code: {code:?}");
        }
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_create_custom_code_too_long() {
        let service = service();
        let code = "a".repeat(31);

        let err = service
            .create_short_url("https://example.com", Some(&code))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidShortCode);
        assert!(err.message().contains("between 3 and 30"));
    }

    #[test]
    fn test_create_duplicate_custom_code() {
        let service = service();
        service
            .create_short_url("https://example.com", Some("mycode"))
            .unwrap();

        let err = service
            .create_short_url("https://other.com", Some("mycode"))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DuplicateShortCode);
        assert_eq!(err.message(), "Short code 'mycode' is already in use.");
        assert_eq!(service.count(), 1);
        assert_eq!(
            service.resolve_short_url("mycode").unwrap(),
            "https://example.com"
        );
    }

    #[test]
    fn test_create_duplicate_when_add_loses_race() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_add().times(1).returning(|_| false);

        let service = UrlService::new(Arc::new(mock_repo), Arc::new(Base62Generator::new()));

        let err = service
            .create_short_url("https://example.com", Some("raced"))
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DuplicateShortCode);
    }

    #[test]
    fn test_same_long_url_gets_different_codes() {
        let service = service();

        let first = service
            .create_short_url("https://example.com", None)
            .unwrap();
        let second = service
            .create_short_url("https://example.com", None)
            .unwrap();

        assert_ne!(first.short_code(), second.short_code());
        assert_eq!(service.count(), 2);
    }

    #[test]
    fn test_generator_collision_retries() {
        let repository = Arc::new(InMemoryUrlRepository::new());
        repository.add(Arc::new(UrlMapping::new("taken12", "https://taken.com")));

        let mut seq = Sequence::new();
        let mut mock_generator = MockShortCodeGenerator::new();
        mock_generator
            .expect_generate()
            .with(eq(7))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| "taken12".to_string());
        mock_generator
            .expect_generate()
            .with(eq(7))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| "fresh12".to_string());

        let service = service_with_generator(Arc::clone(&repository), mock_generator);

        let mapping = service
            .create_short_url("https://example.com", None)
            .unwrap();

        assert_eq!(mapping.short_code(), "fresh12");
        assert_eq!(repository.count(), 2);
    }

    #[test]
    fn test_generator_exhaustion_fails() {
        let repository = Arc::new(InMemoryUrlRepository::new());
        repository.add(Arc::new(UrlMapping::new("taken12", "https://taken.com")));

        let mut mock_generator = MockShortCodeGenerator::new();
        mock_generator
            .expect_generate()
            .times(MAX_GENERATION_ATTEMPTS)
            .returning(|_| "taken12".to_string());

        let service = service_with_generator(Arc::clone(&repository), mock_generator);

        let err = service
            .create_short_url("https://example.com", None)
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::GenerationFailed);
        assert_eq!(repository.count(), 1);
        assert_eq!(
            repository.get_by_short_code("taken12").unwrap().long_url(),
            "https://taken.com"
        );
    }

    #[test]
    fn test_custom_code_skips_generator() {
        let mut mock_generator = MockShortCodeGenerator::new();
        mock_generator.expect_generate().times(0);

        let service =
            service_with_generator(Arc::new(InMemoryUrlRepository::new()), mock_generator);

        assert!(
            service
                .create_short_url("https://example.com", Some("custom"))
                .is_ok()
        );
    }

    #[test]
    fn test_resolve_increments_click_count() {
        let service = service();
        service
            .create_short_url("https://example.com", Some("mycode"))
            .unwrap();

        for _ in 0..3 {
            assert_eq!(
                service.resolve_short_url("mycode").unwrap(),
                "https://example.com"
            );
        }

        assert_eq!(service.get_statistics("mycode").unwrap().click_count, 3);
    }

    #[test]
    fn test_resolve_not_found() {
        let service = service();

        let err = service.resolve_short_url("missing").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.message(), "Short code 'missing' was not found.");
    }

    #[test]
    fn test_blank_code_is_invalid_for_lookups() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_get_by_short_code().times(0);
        mock_repo.expect_delete().times(0);

        let service = UrlService::new(Arc::new(mock_repo), Arc::new(Base62Generator::new()));

        for blank in ["", "  "] {
            assert_eq!(
                service.resolve_short_url(blank).unwrap_err().kind(),
                ErrorKind::InvalidShortCode
            );
            assert_eq!(
                service.get_statistics(blank).unwrap_err().kind(),
                ErrorKind::InvalidShortCode
            );
            assert_eq!(
                service.delete_short_url(blank).unwrap_err().kind(),
                ErrorKind::InvalidShortCode
            );
        }
    }

    #[test]
    fn test_get_statistics_does_not_count_clicks() {
        let service = service();
        let created = service
            .create_short_url("https://example.com", Some("stats"))
            .unwrap();
        service.resolve_short_url("stats").unwrap();

        let first = service.get_statistics("stats").unwrap();
        let second = service.get_statistics("stats").unwrap();

        assert_eq!(first.click_count, 1);
        assert_eq!(second.click_count, 1);
        assert_eq!(first.short_code, "stats");
        assert_eq!(first.long_url, "https://example.com");
        assert_eq!(first.created_at, created.created_at());
    }

    #[test]
    fn test_get_statistics_uses_repository_lookup() {
        let mapping = Arc::new(UrlMapping::new("abc", "https://example.com"));
        mapping.increment_click();

        let mut mock_repo = MockUrlRepository::new();
        let stored = Arc::clone(&mapping);
        mock_repo
            .expect_get_by_short_code()
            .withf(|code| code == "abc")
            .times(1)
            .returning(move |_| Some(Arc::clone(&stored)));

        let service = UrlService::new(Arc::new(mock_repo), Arc::new(Base62Generator::new()));

        let stats = service.get_statistics("abc").unwrap();
        assert_eq!(stats.click_count, 1);
    }

    #[test]
    fn test_delete_then_resolve() {
        let service = service();
        service
            .create_short_url("https://example.com", Some("gone"))
            .unwrap();

        assert!(service.delete_short_url("gone").unwrap());

        assert_eq!(
            service.resolve_short_url("gone").unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            service.get_statistics("gone").unwrap_err().kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            service.delete_short_url("gone").unwrap_err().kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_list_all_empty() {
        assert!(service().list_all().is_empty());
        assert!(service().list_statistics().is_empty());
    }

    #[test]
    fn test_list_statistics_ordered_by_creation() {
        use chrono::{TimeZone, Utc};

        let repository = Arc::new(InMemoryUrlRepository::new());
        let t1 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).unwrap();
        repository.add(Arc::new(UrlMapping::with_created_at("zzz", "https://a.com", t1)));
        repository.add(Arc::new(UrlMapping::with_created_at("bbb", "https://b.com", t2)));
        repository.add(Arc::new(UrlMapping::with_created_at("aaa", "https://c.com", t2)));

        let service = UrlService::new(repository, Arc::new(Base62Generator::new()));
        let codes: Vec<_> = service
            .list_statistics()
            .into_iter()
            .map(|s| s.short_code)
            .collect();

        assert_eq!(codes, vec!["zzz", "aaa", "bbb"]);
    }
}
