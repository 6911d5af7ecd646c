#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use short_link::prelude::*;

pub fn create_test_service() -> UrlService<InMemoryUrlRepository, Base62Generator> {
    UrlService::new(
        Arc::new(InMemoryUrlRepository::new()),
        Arc::new(Base62Generator::new()),
    )
}

pub fn create_test_mapping(code: &str, url: &str) -> Arc<UrlMapping> {
    Arc::new(UrlMapping::new(code, url))
}

/// Generator returning a fixed code for its first `repeat` calls, then
/// codes `fallback-0`, `fallback-1`, ...
pub struct ScriptedGenerator {
    fixed: String,
    repeat: usize,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn new(fixed: &str, repeat: usize) -> Self {
        Self {
            fixed: fixed.to_string(),
            repeat,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ShortCodeGenerator for ScriptedGenerator {
    fn generate(&self, _length: usize) -> String {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.repeat {
            self.fixed.clone()
        } else {
            format!("fallback-{}", call - self.repeat)
        }
    }
}
