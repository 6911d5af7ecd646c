//! In-memory implementation of [`UrlRepository`].

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::UrlRepository;

/// Volatile mapping store backed by a sharded concurrent hash map.
///
/// Contents live only as long as the process; nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemoryUrlRepository {
    store: DashMap<String, Arc<UrlMapping>>,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self {
            store: DashMap::new(),
        }
    }
}

impl UrlRepository for InMemoryUrlRepository {
    fn add(&self, mapping: Arc<UrlMapping>) -> bool {
        // The entry guard holds the shard lock, so check and insert are one step.
        match self.store.entry(mapping.short_code().to_owned()) {
            Entry::Occupied(_) => {
                tracing::trace!(code = %mapping.short_code(), "Insert rejected, code taken");
                false
            }
            Entry::Vacant(slot) => {
                tracing::trace!(code = %mapping.short_code(), "Mapping inserted");
                slot.insert(mapping);
                true
            }
        }
    }

    fn delete(&self, short_code: &str) -> bool {
        self.store.remove(short_code).is_some()
    }

    fn get_by_short_code(&self, short_code: &str) -> Option<Arc<UrlMapping>> {
        self.store
            .get(short_code)
            .map(|entry| Arc::clone(entry.value()))
    }

    fn exists(&self, short_code: &str) -> bool {
        self.store.contains_key(short_code)
    }

    fn get_all(&self) -> Vec<Arc<UrlMapping>> {
        self.store
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    fn count(&self) -> usize {
        self.store.len()
    }
}
